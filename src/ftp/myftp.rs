use crate::ftp::error::{FetchError, Result};
use crate::ftp::fetcher::collect_lines;
use async_ftp::types::{FileType, FormatControl};
use async_ftp::{FtpError, FtpStream};
use log::{debug, info};
use std::time::Duration;
use tokio::time;

/// 对 FtpStream 的简单封装，每个操作的错误都归到对应的阶段
pub struct FTP {
    ftpstream: FtpStream,
}

impl FTP {
    /// 连接ftp服务器，连接和欢迎信息都必须在超时时间内完成
    pub async fn connect(address: &str, timeout: Duration) -> Result<Self> {
        debug!("connecting to {} (timeout {:?})", address, timeout);
        let ftp_stream = match time::timeout(timeout, FtpStream::connect(address)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(FetchError::Connect {
                    address: address.to_string(),
                    source,
                })
            }
            Err(_) => {
                return Err(FetchError::Timeout {
                    address: address.to_string(),
                    timeout,
                })
            }
        };
        info!("Connected to {}", address);
        Ok(FTP {
            ftpstream: ftp_stream,
        })
    }

    /// 登录ftp服务器
    pub async fn login(&mut self, user: &str, password: &str) -> Result<()> {
        self.ftpstream
            .login(user, password)
            .await
            .map_err(|source| FetchError::Authentication {
                user: user.to_string(),
                source,
            })?;
        info!("Login Ok!");
        Ok(())
    }

    /// 进入某个目录下
    pub async fn cwd(&mut self, path: &str) -> Result<()> {
        self.ftpstream
            .cwd(path)
            .await
            .map_err(|source| FetchError::Directory {
                path: path.to_string(),
                source,
            })?;
        debug!("cwd {}", path);
        Ok(())
    }

    /// 以文本模式下载文件，只保留前 max_lines 行
    pub async fn retr_lines(&mut self, filename: &str, max_lines: usize) -> Result<Vec<String>> {
        let to_transfer_error = |source: FtpError| FetchError::Transfer {
            filename: filename.to_string(),
            source,
        };
        self.ftpstream
            .transfer_type(FileType::Ascii(FormatControl::Default))
            .await
            .map_err(to_transfer_error)?;
        let lines = self
            .ftpstream
            .retr(filename, move |reader| async move {
                collect_lines(reader, max_lines)
                    .await
                    .map_err(FtpError::ConnectionError)
            })
            .await
            .map_err(to_transfer_error)?;
        info!("RETR {}: kept {} lines", filename, lines.len());
        Ok(lines)
    }

    /// 断开链接
    pub async fn disconnect(&mut self) -> Result<()> {
        self.ftpstream
            .quit()
            .await
            .map_err(|source| FetchError::Disconnect { source })?;
        debug!("session closed");
        Ok(())
    }
}
