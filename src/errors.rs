use std::fmt;

/// Interpreter operators, used to label operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    New,
    Del,
    Get,
    Reverse,
    Add,
    Count,
}

impl Operator {
    /// Token that introduces the operator in the command language.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::New => "NEW",
            Operator::Del => "DEL",
            Operator::Get | Operator::Reverse => "?",
            Operator::Add => ">",
            Operator::Count => "@",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneForwardError {
    InvalidArgument(String),
    ResourceExhausted(String),
    NotFound(String),
    /// Malformed input; `offset` is the 1-based byte position of the
    /// offending lexeme.
    Syntax { offset: usize },
    UnexpectedEof,
    /// A well-formed command that could not be carried out.
    Operation { op: Operator, offset: usize },
    FileOperation(String),
    Config(String),
    /// The forward and reverse tries disagree.
    Inconsistent(String),
}

impl PhoneForwardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PhoneForwardError::InvalidArgument(_) => "E001",
            PhoneForwardError::ResourceExhausted(_) => "E002",
            PhoneForwardError::NotFound(_) => "E003",
            PhoneForwardError::Syntax { .. } => "E004",
            PhoneForwardError::UnexpectedEof => "E005",
            PhoneForwardError::Operation { .. } => "E006",
            PhoneForwardError::FileOperation(_) => "E007",
            PhoneForwardError::Config(_) => "E008",
            PhoneForwardError::Inconsistent(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PhoneForwardError::InvalidArgument(_) => "Invalid Argument",
            PhoneForwardError::ResourceExhausted(_) => "Resource Exhausted",
            PhoneForwardError::NotFound(_) => "Not Found",
            PhoneForwardError::Syntax { .. } => "Syntax Error",
            PhoneForwardError::UnexpectedEof => "Unexpected End Of Input",
            PhoneForwardError::Operation { .. } => "Operation Failed",
            PhoneForwardError::FileOperation(_) => "File Operation Error",
            PhoneForwardError::Config(_) => "Configuration Error",
            PhoneForwardError::Inconsistent(_) => "Index Inconsistency",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            PhoneForwardError::InvalidArgument(msg)
            | PhoneForwardError::ResourceExhausted(msg)
            | PhoneForwardError::NotFound(msg)
            | PhoneForwardError::FileOperation(msg)
            | PhoneForwardError::Config(msg)
            | PhoneForwardError::Inconsistent(msg) => msg.clone(),
            PhoneForwardError::Syntax { offset } => format!("at byte {}", offset),
            PhoneForwardError::UnexpectedEof => "input ended inside a command".to_string(),
            PhoneForwardError::Operation { op, offset } => {
                format!("operator {} at byte {}", op, offset)
            }
        }
    }

    /// The one-line diagnostic the interpreter prints before exiting:
    /// `ERROR n`, `ERROR EOF` or `ERROR <op> n`.
    pub fn diagnostic(&self) -> String {
        match self {
            PhoneForwardError::Syntax { offset } => format!("ERROR {}", offset),
            PhoneForwardError::UnexpectedEof => "ERROR EOF".to_string(),
            PhoneForwardError::Operation { op, offset } => format!("ERROR {} {}", op, offset),
            other => format!("ERROR {}", other.format_simple()),
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PhoneForwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PhoneForwardError {}

// 便捷的构造函数
impl PhoneForwardError {
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::InvalidArgument(msg.into())
    }

    pub fn resource_exhausted<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::ResourceExhausted(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::NotFound(msg.into())
    }

    pub fn syntax(offset: usize) -> Self {
        PhoneForwardError::Syntax { offset }
    }

    pub fn operation(op: Operator, offset: usize) -> Self {
        PhoneForwardError::Operation { op, offset }
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::Config(msg.into())
    }

    pub fn inconsistent<T: Into<String>>(msg: T) -> Self {
        PhoneForwardError::Inconsistent(msg.into())
    }
}

impl From<std::io::Error> for PhoneForwardError {
    fn from(err: std::io::Error) -> Self {
        PhoneForwardError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for PhoneForwardError {
    fn from(err: config::ConfigError) -> Self {
        PhoneForwardError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PhoneForwardError {
    fn from(err: toml::ser::Error) -> Self {
        PhoneForwardError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhoneForwardError>;
