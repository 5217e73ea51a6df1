mod source;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use latina_morph::{AdjectivePattern, Declension, NounPattern};
use latina_protocol::{AdjectiveForm, FormKey, Gender, NounForm};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::source::LexiconSource;

#[derive(Parser)]
#[command(author, version, about = "Declines Latin nouns and adjectives and compiles lexicons to rkyv binaries")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every slot of a root under a pattern
    Decline {
        #[arg(short, long)]
        pattern: String,
        #[arg(short, long)]
        root: String,
        /// Noun gender; defaults to the pattern's primary gender
        #[arg(short, long)]
        gender: Option<Gender>,
    },
    /// Recover the root from a declined form
    Root {
        #[arg(short, long)]
        pattern: String,
        /// Category key such as "gen.pl" or "sup.abl.sg.f"
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        form: String,
        #[arg(short, long)]
        gender: Option<Gender>,
    },
    /// Print the slots that always share a form with the given one
    Equal {
        #[arg(short, long)]
        pattern: String,
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        gender: Option<Gender>,
    },
    /// Compile a JSON lexicon source into an rkyv binary
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// List the known patterns
    Patterns,
}

enum AnyPattern {
    Noun(NounPattern),
    Adjective(AdjectivePattern),
}

impl FromStr for AnyPattern {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(pattern) = NounPattern::from_name(name) {
            return Ok(Self::Noun(pattern));
        }
        if let Some(pattern) = AdjectivePattern::from_name(name) {
            return Ok(Self::Adjective(pattern));
        }
        bail!("unknown pattern {name:?}; run `paradigm-compiler patterns` for the list")
    }
}

fn noun_gender(pattern: NounPattern, gender: Option<Gender>) -> anyhow::Result<Gender> {
    gender
        .or_else(|| pattern.primary_gender())
        .ok_or_else(|| anyhow!("pattern {pattern} has no primary gender; pass --gender"))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Decline { pattern, root, gender } => decline(&pattern.parse()?, &root, gender),
        Command::Root {
            pattern,
            category,
            form,
            gender,
        } => root(&pattern.parse()?, &category, &form, gender),
        Command::Equal {
            pattern,
            category,
            gender,
        } => equal(&pattern.parse()?, &category, gender),
        Command::Compile { input, output } => compile(&input, &output),
        Command::Patterns => {
            patterns();
            Ok(())
        }
    }
}

fn print_slot<K: FormKey>(key: K, form: Result<String, impl std::fmt::Display>) {
    match form {
        Ok(form) => println!("{key}\t{form}"),
        Err(err) => println!("{key}\t-\t({err})"),
    }
}

fn decline(pattern: &AnyPattern, root: &str, gender: Option<Gender>) -> anyhow::Result<()> {
    let root = root.trim().to_lowercase();
    if root.is_empty() {
        bail!("root must not be empty");
    }
    match *pattern {
        AnyPattern::Noun(pattern) => {
            let gender = noun_gender(pattern, gender)?;
            for key in NounForm::all() {
                print_slot(key, pattern.decline(key, gender, &root));
            }
        }
        AnyPattern::Adjective(pattern) => {
            for key in AdjectiveForm::all() {
                print_slot(key, pattern.decline(key, &root));
            }
        }
    }
    Ok(())
}

fn root(pattern: &AnyPattern, category: &str, form: &str, gender: Option<Gender>) -> anyhow::Result<()> {
    let form = form.trim();
    let root = match *pattern {
        AnyPattern::Noun(pattern) => {
            let key: NounForm = category.parse()?;
            pattern.determine_root(key, noun_gender(pattern, gender)?, form)?
        }
        AnyPattern::Adjective(pattern) => pattern.determine_root(category.parse()?, form)?,
    };
    println!("{root}");
    Ok(())
}

fn equal(pattern: &AnyPattern, category: &str, gender: Option<Gender>) -> anyhow::Result<()> {
    let members: Vec<String> = match *pattern {
        AnyPattern::Noun(pattern) => {
            let key: NounForm = category.parse()?;
            pattern
                .equal_forms(key, noun_gender(pattern, gender)?)
                .into_iter()
                .flatten()
                .map(|key| key.to_string())
                .collect()
        }
        AnyPattern::Adjective(pattern) => pattern
            .equal_forms(category.parse()?)
            .into_iter()
            .flatten()
            .map(|key| key.to_string())
            .collect(),
    };
    if members.is_empty() {
        println!("{category}: no equal forms");
    } else {
        println!("{}", members.join(" "));
    }
    Ok(())
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    info!(input = %input.display(), "reading lexicon source");
    let input_data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let source: LexiconSource = serde_json::from_str(&input_data).context("parsing lexicon source")?;

    let lexicon = source::compile(&source)?;

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&lexicon)
        .map_err(|err| anyhow!("rkyv serialization failed: {err:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    info!(output = %output.display(), bytes = bytes.len(), "binary written");
    Ok(())
}

fn patterns() {
    for row in pattern_rows() {
        println!("{row}");
    }
}

fn pattern_rows() -> Vec<String> {
    let genders = |admits: &dyn Fn(Gender) -> bool| {
        Gender::ALL
            .iter()
            .filter(|g| admits(**g))
            .map(|g| g.abbreviation())
            .collect::<Vec<_>>()
            .join(",")
    };
    let mut rows = Vec::new();
    for pattern in NounPattern::ALL {
        let primary = pattern.primary_gender().map_or("-", Gender::abbreviation);
        rows.push(format!(
            "noun\t{pattern}\tprimary={primary}\tadmits={}",
            genders(&|g| pattern.allows_gender(g))
        ));
    }
    for pattern in AdjectivePattern::ALL {
        let declension = pattern.declension();
        let primary = declension.primary_gender().map_or("-", Gender::abbreviation);
        rows.push(format!(
            "adjective\t{pattern}\tprimary={primary}\tadmits={}",
            genders(&|g| declension.allows_gender(g))
        ));
    }
    rows
}
