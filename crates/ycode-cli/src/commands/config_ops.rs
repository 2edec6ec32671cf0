use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", ycode_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(ycode_core::parse_settings_toml(&content), "Error: {}");
    let silent: String = s.yivo.silent_chars().iter().collect();
    println!(
        "OK: yivo.use_nonphonetic={}, yivo.silent_chars={:?}",
        s.yivo.use_nonphonetic, silent
    );
}
