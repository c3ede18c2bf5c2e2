use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_report<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: &data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}
