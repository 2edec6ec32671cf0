const SETTINGS_PATH: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");
    if let Err(reason) = check_settings(include_str!("src/default_settings.toml")) {
        panic!("{SETTINGS_PATH}: {reason}");
    }
}

/// The embedded settings must carry every `[yivo]` key the library reads,
/// with the types it expects.
fn check_settings(content: &str) -> Result<(), String> {
    let doc: toml::Table = content.parse().map_err(|e| format!("invalid TOML: {e}"))?;
    let yivo = doc
        .get("yivo")
        .and_then(toml::Value::as_table)
        .ok_or("missing [yivo] table")?;

    yivo.get("use_nonphonetic")
        .and_then(toml::Value::as_bool)
        .ok_or("yivo.use_nonphonetic must be a boolean")?;

    let silent = yivo
        .get("silent_chars")
        .and_then(toml::Value::as_array)
        .ok_or("yivo.silent_chars must be an array")?;
    for (i, entry) in silent.iter().enumerate() {
        let single = entry.as_str().is_some_and(|s| s.chars().count() == 1);
        if !single {
            return Err(format!("yivo.silent_chars[{i}] must be a one-character string"));
        }
    }
    Ok(())
}
