use crate::ftp::config::{
    FetchConfig, DEFAULT_DIRECTORY, DEFAULT_HOST, DEFAULT_MAX_LINES, DEFAULT_MAX_LINES_STR,
    DEFAULT_PORT, DEFAULT_PORT_STR, DEFAULT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS_STR,
};
use clap::{App, Arg};
use std::ffi::OsString;
use std::time::Duration;

/// 命令行参数,保存用户输入的各个参数
pub struct CommandArgument {
    filename: Option<String>,
    host: String,
    port: u16,
    directory: String,
    timeout: u64,
    max_lines: usize,
}

fn command_app() -> App<'static> {
    App::new("forecast")
        .version("0.1")
        .author("chenlinfeng")
        .about("fetch the first lines of a forecast bulletin over anonymous ftp")
        .arg(
            Arg::new("file")
                .help("the remote filename, e.g. IDN10064.txt")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("host")
                .short('H')
                .long("host")
                .help("ftp host")
                .default_value(DEFAULT_HOST)
                .takes_value(true),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("ftp control port")
                .default_value(DEFAULT_PORT_STR)
                .takes_value(true),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("remote directory")
                .default_value(DEFAULT_DIRECTORY)
                .takes_value(true),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("connection timeout in seconds")
                .default_value(DEFAULT_TIMEOUT_SECS_STR)
                .takes_value(true),
        )
        .arg(
            Arg::new("lines")
                .short('n')
                .long("lines")
                .help("maximum number of lines to keep")
                .default_value(DEFAULT_MAX_LINES_STR)
                .takes_value(true),
        )
}

impl CommandArgument {
    pub fn new() -> Self {
        Self {
            filename: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            directory: DEFAULT_DIRECTORY.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
    /// 解析命令行参数如果出现参数缺失将会返回相关错误信息
    pub fn parse(&mut self) -> Result<(), clap::Error> {
        self.parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(&mut self, args: I) -> Result<(), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matcher = command_app().try_get_matches_from(args)?;
        self.filename = matcher.value_of("file").map(|file| file.to_string());
        if let Some(host) = matcher.value_of("host") {
            self.host = host.to_string();
        }
        if let Some(dir) = matcher.value_of("dir") {
            self.directory = dir.to_string();
        }
        self.port = matcher.value_of_t("port")?;
        self.timeout = matcher.value_of_t("timeout")?;
        self.max_lines = matcher.value_of_t("lines")?;
        Ok(())
    }

    /// 获取远程文件名
    pub fn get_filename(&self) -> Option<String> {
        self.filename.clone()
    }

    /// 由命令行参数生成会话配置
    pub fn get_config(&self) -> FetchConfig {
        FetchConfig::new()
            .set_host(self.host.clone())
            .set_port(self.port)
            .set_directory(self.directory.clone())
            .set_timeout(Duration::from_secs(self.timeout))
            .set_max_lines(self.max_lines)
    }
}
