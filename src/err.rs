use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum PipeErr {
    #[error("[Bad Arg] Invalid value `{value}` for argument `{arg}` of op `{op}`")]
    InvalidArg { op: &'static str, arg: &'static str, value: String },

    #[error("[Single] Pipeline contains no element")]
    NoElement,

    #[error("[Single] Pipeline contains more than one element")]
    MoreThanOne,

    #[error("[Cursor] Advance called on a cursor with no available element")]
    Exhausted,
}

impl PipeErr {
    pub(crate) fn invalid_arg(op: &'static str, arg: &'static str, value: impl ToString) -> PipeErr {
        PipeErr::InvalidArg { op, arg, value: value.to_string() }
    }

    /// 是否为配置错误，即在构建流水线时即可发现的参数错误。
    pub fn is_config_err(&self) -> bool {
        matches!(self, PipeErr::InvalidArg { .. })
    }
}
