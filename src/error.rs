use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 答案键配置错误
    Config(ConfigError),
    /// 文件操作错误
    File(FileError),
    /// 答案提取错误
    Extract(ExtractError),
    /// 报告导出错误
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Extract(e) => write!(f, "提取错误: {}", e),
            AppError::Export(e) => write!(f, "导出错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Extract(e) => Some(e),
            AppError::Export(e) => Some(e),
        }
    }
}

/// 答案键配置错误
///
/// 答案键缺失或格式不对属于致命前置条件，必须在评分开始前中止
#[derive(Debug)]
pub enum ConfigError {
    /// 答案键文件不存在
    KeyFileNotFound {
        path: String,
    },
    /// 答案键文件读取失败
    KeyReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 答案键工作簿中没有工作表
    KeySheetMissing {
        path: String,
    },
    /// 答案键缺少必需的列
    MissingColumns {
        missing: Vec<String>,
    },
    /// 答案键单元格无法解析为整数
    InvalidKeyCell {
        row: usize,
        column: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::KeyFileNotFound { path } => {
                write!(f, "答案键文件不存在: {}", path)
            }
            ConfigError::KeyReadFailed { path, source } => {
                write!(f, "读取答案键失败 ({}): {}", path, source)
            }
            ConfigError::KeySheetMissing { path } => {
                write!(f, "答案键工作簿中没有工作表: {}", path)
            }
            ConfigError::MissingColumns { missing } => {
                write!(f, "答案键缺少必需的列: {}", missing.join(", "))
            }
            ConfigError::InvalidKeyCell { row, column } => {
                write!(f, "答案键第 {} 行的 {} 列无法解析为整数", row, column)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::KeyReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 答案提取错误
#[derive(Debug)]
pub enum ExtractError {
    /// PDF 文本解析失败
    PdfParseFailed {
        message: String,
    },
    /// 整份文档中没有找到任何题号/所选选项标记
    ///
    /// 注意：提取器本身返回空序列（这是正常结果），由编排层把空结果
    /// 升级为此错误，避免把"无法提取"误报为零分
    NoAnswersFound,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::PdfParseFailed { message } => {
                write!(f, "无法解析PDF文档: {}", message)
            }
            ExtractError::NoAnswersFound => {
                write!(
                    f,
                    "未能从文档中提取到题号和所选选项（可能是扫描版PDF或版式不同），请从官方网站重新下载文字版答题卡"
                )
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// 报告导出错误
#[derive(Debug)]
pub enum ExportError {
    /// 工作簿写入失败
    WorkbookWriteFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::WorkbookWriteFailed { source } => {
                write!(f, "报告工作簿写入失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::WorkbookWriteFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(ExportError::WorkbookWriteFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建答案键读取错误
    pub fn key_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Config(ConfigError::KeyReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建答案键缺列错误
    pub fn missing_columns(missing: Vec<String>) -> Self {
        AppError::Config(ConfigError::MissingColumns { missing })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建TOML解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建PDF解析错误
    pub fn pdf_parse_failed(message: impl Into<String>) -> Self {
        AppError::Extract(ExtractError::PdfParseFailed {
            message: message.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
