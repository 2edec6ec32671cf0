use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use serde::Serialize;

use ycode_core::{
    parse_settings_toml, CollectingSink, Diagnostic, RuleTables, Settings, Transliterator,
};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Where the engine's tables and settings come from.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resources<'a> {
    /// Directory holding the four table files; embedded tables when absent.
    pub tables: Option<&'a str>,
    /// Settings TOML; the embedded default when absent.
    pub settings: Option<&'a str>,
}

pub fn open_transliterator(res: Resources<'_>) -> Transliterator {
    let tables = match res.tables {
        Some(dir) => die!(
            RuleTables::from_dir(Path::new(dir)),
            "Error loading tables from {dir}: {}"
        ),
        None => die!(RuleTables::embedded(), "Error loading embedded tables: {}"),
    };
    let settings = match res.settings {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(parse_settings_toml(&content), "Error: {}")
        }
        None => Settings::default(),
    };
    Transliterator::new(tables).with_settings(settings)
}

/// Apply `f` to the positional text, or to every stdin line when none is
/// given.
fn for_each_input(text: Option<&str>, mut f: impl FnMut(&str) -> String) {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match text {
        Some(text) => {
            die!(writeln!(out, "{}", f(text)), "Error writing output: {}");
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                die!(writeln!(out, "{}", f(&line)), "Error writing output: {}");
            }
        }
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn to_ycode(text: Option<&str>, res: Resources<'_>) {
    let t = open_transliterator(res);
    for_each_input(text, |line| t.yiddish_to_ycode(line));
}

pub fn to_yiddish(text: Option<&str>, res: Resources<'_>) {
    let t = open_transliterator(res);
    for_each_input(text, |line| t.ycode_to_yiddish(line));
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YivoOptions {
    pub phonetic_only: bool,
    pub report_unknown: bool,
    pub json: bool,
}

/// One converted line in `--json` output.
#[derive(Debug, Serialize)]
pub struct YivoRecord {
    pub yivo: String,
    pub ycode: String,
    pub yiddish: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<UnknownRecord>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UnknownRecord {
    pub ch: char,
    pub code_point: String,
    pub word: String,
}

impl From<Diagnostic> for UnknownRecord {
    fn from(d: Diagnostic) -> Self {
        match d {
            Diagnostic::UnknownCharacter { ch, word } => UnknownRecord {
                ch,
                code_point: format!("U+{:04X}", ch as u32),
                word,
            },
        }
    }
}

/// Convert one line of YIVO text, collecting what the sink saw for it.
pub fn yivo_record(t: &Transliterator, sink: &CollectingSink, line: &str) -> YivoRecord {
    let ycode = t.yivo_text_to_ycode(line);
    YivoRecord {
        yivo: line.to_string(),
        yiddish: t.ycode_to_yiddish(&ycode),
        ycode,
        unknown: sink.take().into_iter().map(UnknownRecord::from).collect(),
    }
}

pub fn yivo(text: Option<&str>, res: Resources<'_>, opts: YivoOptions) {
    let mut t = open_transliterator(res);
    if opts.phonetic_only {
        let mut settings = t.settings().clone();
        settings.yivo.use_nonphonetic = false;
        t = t.with_settings(settings);
    }

    let collect = opts.report_unknown || opts.json;
    let sink = Arc::new(CollectingSink::new());
    if collect {
        t = t.with_sink(sink.clone());
    }

    let mut unknown = Vec::new();
    for_each_input(text, |line| {
        if opts.json {
            let record = yivo_record(&t, &sink, line);
            die!(serde_json::to_string(&record), "Error encoding JSON: {}")
        } else {
            let ycode = t.yivo_text_to_ycode(line);
            unknown.extend(sink.take());
            ycode
        }
    });

    if opts.report_unknown && !opts.json {
        for d in &unknown {
            eprintln!("{d}");
        }
        eprintln!("{} unknown character(s)", unknown.len());
    }
}
