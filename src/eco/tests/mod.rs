mod common;
mod format;
mod recommend;
mod savings;
mod validate;
