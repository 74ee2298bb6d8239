use std::fmt::{self, Formatter};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "ftp.bom.gov.au";
pub const DEFAULT_PORT: u16 = 21;
pub const DEFAULT_DIRECTORY: &str = "/anon/gen/fwo/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_LINES: usize = 100;
// 命令行参数的默认值，需与上面的数值保持一致
pub const DEFAULT_PORT_STR: &str = "21";
pub const DEFAULT_TIMEOUT_SECS_STR: &str = "30";
pub const DEFAULT_MAX_LINES_STR: &str = "100";
// 匿名登录使用的账号
pub const ANONYMOUS_USER: &str = "anonymous";
pub const ANONYMOUS_PASSWORD: &str = "anonymous@";

/// 一次会话所需的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    host: String,      //服务器地址
    port: u16,         //控制连接端口
    directory: String, //远程目录
    timeout: Duration, //连接超时时间
    max_lines: usize,  //最多保留的行数
    user: String,
    password: String,
}

impl fmt::Display for FetchConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ftp://{}:{}{} timeout:{:?} max_lines:{}",
            self.host, self.port, self.directory, self.timeout, self.max_lines
        )
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            directory: DEFAULT_DIRECTORY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_lines: DEFAULT_MAX_LINES,
            user: ANONYMOUS_USER.to_string(),
            password: ANONYMOUS_PASSWORD.to_string(),
        }
    }
    /// 设置服务器地址
    pub fn set_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }
    /// 设置端口
    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
    /// 设置远程目录
    pub fn set_directory(mut self, directory: String) -> Self {
        self.directory = directory;
        self
    }
    /// 设置连接超时时间
    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
    /// 设置保留的最大行数
    pub fn set_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }
    pub fn set_credentials(mut self, user: String, password: String) -> Self {
        self.user = user;
        self.password = password;
        self
    }

    /// 控制连接的地址，形如 host:port
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn directory(&self) -> &str {
        &self.directory
    }
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn password(&self) -> &str {
        &self.password
    }
}
