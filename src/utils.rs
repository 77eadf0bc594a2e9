pub mod common_affix_len;
pub mod side;
pub mod string_or_nothing;
