//! 集成测试用的简易 FTP 服务器
//!
//! 只实现匿名会话需要的命令：USER/PASS、CWD、TYPE、PASV、RETR 和 QUIT。
//! 收到的每条命令都会被记录下来，测试可以据此检查客户端如何关闭会话。
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MockOptions {
    /// 为 false 时接受控制连接，但不发送 220 欢迎信息
    pub greet: bool,
    /// 为 false 时 PASS 返回 530
    pub accept_login: bool,
    /// 为 false 时 QUIT 返回 500
    pub accept_quit: bool,
    /// CWD 唯一接受的目录
    pub directory: String,
    pub files: HashMap<String, Vec<u8>>,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            greet: true,
            accept_login: true,
            accept_quit: true,
            directory: "/anon/gen/fwo/".to_string(),
            files: HashMap::new(),
        }
    }
}

impl MockOptions {
    pub fn with_file(mut self, name: &str, body: &str) -> Self {
        self.files.insert(name.to_string(), body.as_bytes().to_vec());
        self
    }
}

pub struct MockServer {
    pub port: u16,
    commands: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// 目前为止收到的所有命令，按到达顺序排列
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn saw(&self, verb: &str) -> bool {
        self.commands().iter().any(|c| c.starts_with(verb))
    }
}

/// 在后台线程中启动服务器，直到进程退出
pub fn start(opts: MockOptions) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let commands = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&commands);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &opts, &log));
        }
    });
    MockServer { port, commands }
}

/// 127.0.0.1 上一个没有监听者的端口
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

/// 生成 count 行带编号的文本，以 CRLF 结尾，与文本模式下服务器发送的一致
pub fn numbered(count: usize) -> String {
    (1..=count).map(|i| format!("line {}\r\n", i)).collect()
}

fn reply(stream: &mut TcpStream, line: &str) -> std::io::Result<()> {
    stream.write_all(format!("{}\r\n", line).as_bytes())
}

fn handle(mut stream: TcpStream, opts: &MockOptions, log: &Mutex<Vec<String>>) {
    if !opts.greet {
        thread::sleep(Duration::from_secs(5));
        return;
    }
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    if reply(&mut stream, "220 mock ready").is_err() {
        return;
    }
    let mut reader = match stream.try_clone() {
        Ok(s) => BufReader::new(s),
        Err(_) => return,
    };
    let mut data_listener: Option<TcpListener> = None;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let line = line.trim_end().to_string();
        log.lock().unwrap().push(line.clone());
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb.to_ascii_uppercase(), arg.to_string()),
            None => (line.to_ascii_uppercase(), String::new()),
        };
        let result = match verb.as_str() {
            "USER" => reply(&mut stream, "331 need password"),
            "PASS" if opts.accept_login => reply(&mut stream, "230 logged in"),
            "PASS" => reply(&mut stream, "530 login incorrect"),
            "CWD" if arg == opts.directory => reply(&mut stream, "250 directory changed"),
            "CWD" => reply(&mut stream, "550 no such directory"),
            "TYPE" => reply(&mut stream, "200 type set"),
            "PASV" => {
                let listener = TcpListener::bind("127.0.0.1:0").expect("bind data");
                let port = listener.local_addr().unwrap().port();
                data_listener = Some(listener);
                reply(
                    &mut stream,
                    &format!(
                        "227 Entering Passive Mode (127,0,0,1,{},{})",
                        port >> 8,
                        port & 0xff
                    ),
                )
            }
            "RETR" => match (opts.files.get(&arg), data_listener.as_ref()) {
                (Some(body), Some(listener)) => send_file(&mut stream, listener, body),
                _ => reply(&mut stream, "550 no such file"),
            },
            "QUIT" if opts.accept_quit => {
                let _ = reply(&mut stream, "221 bye");
                return;
            }
            "QUIT" => {
                let _ = reply(&mut stream, "500 nope");
                return;
            }
            _ => reply(&mut stream, "502 not implemented"),
        };
        if result.is_err() {
            return;
        }
    }
}

fn send_file(stream: &mut TcpStream, listener: &TcpListener, body: &[u8]) -> std::io::Result<()> {
    reply(stream, "150 opening data connection")?;
    let (mut data, _) = listener.accept()?;
    data.write_all(body)?;
    drop(data);
    reply(stream, "226 transfer complete")
}
