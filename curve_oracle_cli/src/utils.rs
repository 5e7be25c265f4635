use console::style;
use curve_oracle::OracleError;
use std::backtrace::BacktraceStatus;

/// Errors caused by the arguments themselves. The message says everything,
/// a backtrace would only point into the argument decoding.
fn is_input_error(e: &anyhow::Error) -> bool {
    e.downcast_ref::<OracleError>().is_some()
}

pub fn print_error(e: anyhow::Error) {
    for e in e.chain().rev() {
        eprintln!(
            "{}{} {}",
            style("error").red().bold(),
            style(":").white().bold(),
            e
        );
    }
    if is_input_error(&e) {
        return;
    }
    let bt = e.backtrace();
    if bt.status() == BacktraceStatus::Captured {
        eprintln!("error backtrace:");
        eprintln!("{bt}");
    }
}
