use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = jrnl_api::Args::parse();

	jrnl_api::run(args).await
}
