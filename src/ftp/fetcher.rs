use crate::ftp::config::FetchConfig;
use crate::ftp::error::Result;
use crate::ftp::myftp::FTP;
use log::{debug, warn};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time;

/// 从固定目录中获取预报文件的前若干行，以换行符连接后返回
///
/// 连接建立之后，无论后续步骤成功与否都会发送 QUIT 关闭会话。
pub async fn fetch(config: &FetchConfig, filename: &str) -> Result<String> {
    debug!("fetch {} from {}", filename, config);
    let mut ftp = FTP::connect(&config.address(), config.timeout()).await?;
    let lines = match retrieve(&mut ftp, config, filename).await {
        Ok(lines) => lines,
        Err(err) => {
            // 出错后仍然尝试关闭会话，但以最初的错误为准
            match time::timeout(config.timeout(), ftp.disconnect()).await {
                Ok(Ok(())) => {}
                Ok(Err(quit_err)) => warn!("{:?}", quit_err),
                Err(_) => warn!("QUIT timed out after {:?}", config.timeout()),
            }
            return Err(err);
        }
    };
    ftp.disconnect().await?;
    Ok(lines.join("\n"))
}

async fn retrieve(ftp: &mut FTP, config: &FetchConfig, filename: &str) -> Result<Vec<String>> {
    ftp.login(config.user(), config.password()).await?;
    ftp.cwd(config.directory()).await?;
    ftp.retr_lines(filename, config.max_lines()).await
}

/// 按行读取数据，只保留前 max_lines 行，其余的行读完后丢弃
pub async fn collect_lines<R>(reader: R, max_lines: usize) -> io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut kept = Vec::new();
    let mut dropped: usize = 0;
    while let Some(line) = lines.next_line().await? {
        if kept.len() < max_lines {
            kept.push(line);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!("dropped {} lines beyond the first {}", dropped, max_lines);
    }
    Ok(kept)
}

/// 打印获取结果
pub fn report<W: Write>(out: &mut W, forecast: &str) -> io::Result<()> {
    writeln!(out, "FTP connection closed.")?;
    writeln!(out, "Fetched forecast data:")?;
    writeln!(out, "{}", forecast)?;
    Ok(())
}
