use std::env;
use std::path::PathBuf;
use translation_bundler::{AppConfig, ConversionPipeline, MediaType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str =
    "usage: translation-bundler <input.csv|input.json> [output.zip] [--media-type <type>] [--config <path>]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let cli = CliArgs::parse(&args)?;

    let config = AppConfig::load_or_default(cli.config_path.as_deref());

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("translation_bundler={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let media_type = match cli.media_type {
        Some(declared) => declared,
        None => MediaType::from_extension(&cli.input)?.as_str().to_string(),
    };

    let bytes = tokio::fs::read(&cli.input).await?;

    let pipeline = ConversionPipeline::new(&config);
    let artifact = pipeline.convert(&media_type, &bytes).await?;

    tokio::fs::copy(artifact.archive_path(), &cli.output).await?;
    tracing::info!(output = %cli.output.display(), "translation bundle written");

    artifact.cleanup().await;

    Ok(())
}

struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    media_type: Option<String>,
    config_path: Option<String>,
}

impl CliArgs {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut input = None;
        let mut output = None;
        let mut media_type = None;
        let mut config_path = None;

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--media-type" => media_type = Some(next_value(&mut iter, "--media-type")?),
                "--config" => config_path = Some(next_value(&mut iter, "--config")?),
                "--help" | "-h" => {
                    println!("{USAGE}");
                    std::process::exit(0);
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ if output.is_none() => output = Some(PathBuf::from(arg)),
                other => anyhow::bail!("unexpected argument: {other}\n{USAGE}"),
            }
        }

        Ok(Self {
            input: input.ok_or_else(|| anyhow::anyhow!("missing input file\n{USAGE}"))?,
            output: output.unwrap_or_else(|| PathBuf::from("translations.zip")),
            media_type,
            config_path,
        })
    }
}

fn next_value<'a, I>(iter: &mut I, flag: &str) -> anyhow::Result<String>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a value\n{USAGE}"))
}
