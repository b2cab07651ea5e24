mod format;
mod json;
mod table;

pub(crate) use json::{STDOUT_PATH, output_summary_json, read_records, write_records};
pub(crate) use table::{print_summary_table, print_violations};
