pub mod config;
pub mod error;
pub mod fetcher;
pub mod myftp;
pub mod parser;

use anyhow::{Context, Result};
use colorful::{Color, Colorful};
use config::FetchConfig;
use parser::CommandArgument;
use std::io::{self, Write};

/// 获取预报并写到标准输出：先打印结果，再原样回显一次
async fn run<W: Write>(out: &mut W, config: &FetchConfig, filename: &str) -> Result<()> {
    let forecast = fetcher::fetch(config, filename).await?;
    fetcher::report(out, &forecast).context("could not write forecast to stdout")?;
    writeln!(out, "{}", forecast).context("could not write forecast to stdout")?;
    out.flush().context("could not write forecast to stdout")?;
    Ok(())
}

pub async fn execute() {
    //初始化日志
    pretty_env_logger::init_timed();
    // 解析参数
    let mut command = CommandArgument::new();
    if let Err(error) = command.parse() {
        if !error.use_stderr() {
            // --help 与 --version
            error.exit();
        }
        let _ = error.print();
        eprintln!("{}", "Please check your entry".color(Color::Red));
        std::process::exit(1);
    }
    let filename = match command.get_filename() {
        Some(filename) => filename,
        None => {
            eprintln!("{}", "Please check your entry".color(Color::Red));
            std::process::exit(1);
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = run(&mut out, &command.get_config(), &filename).await {
        eprintln!("FTP connection or operation failed: {:#}", error);
        std::process::exit(1);
    }
}
