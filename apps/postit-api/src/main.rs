use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = postit_api::Args::parse();
	postit_api::run(args).await
}
