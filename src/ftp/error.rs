use async_ftp::FtpError;
use std::time::Duration;
use thiserror::Error;

/// 获取预报过程中可能出现的错误，每个阶段对应一种
///
/// 错误信息只描述出错的阶段，底层的 FtpError 通过 source() 取得。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not connect to {address}")]
    Connect {
        address: String,
        #[source]
        source: FtpError,
    },

    #[error("timed out after {timeout:?} connecting to {address}")]
    Timeout { address: String, timeout: Duration },

    #[error("login as {user} rejected")]
    Authentication {
        user: String,
        #[source]
        source: FtpError,
    },

    #[error("could not change directory to {path}")]
    Directory {
        path: String,
        #[source]
        source: FtpError,
    },

    #[error("could not retrieve {filename}")]
    Transfer {
        filename: String,
        #[source]
        source: FtpError,
    },

    #[error("could not close session")]
    Disconnect {
        #[source]
        source: FtpError,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
