use std::{io, process, sync::Arc};

use onbrand::{
    application::{
        clock::SystemClock,
        error::AppError,
        loader::PostLoader,
        repos::PostSource,
        review::ReviewOptions,
        router::Router,
        session::Session,
    },
    config::{self, SessionArgs, Settings},
    infra::{api::PostsApi, error::InfraError, location::MemoryLocation, telemetry},
    presentation::console,
};
use onbrand_api_types::PostsResponse;
use tokio::io::BufReader;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Session(SessionArgs::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let api = PostsApi::new(&settings.api.base_url, settings.api.timeout)?;

    match command {
        config::Command::Session(args) => run_session(settings, api, args).await,
        config::Command::Posts => run_posts(api).await,
    }
}

async fn run_session(settings: Settings, api: PostsApi, args: SessionArgs) -> Result<(), AppError> {
    let asset_base = api.base().clone();
    let location = Arc::new(MemoryLocation::new(args.fragment.unwrap_or_default()));
    let router = Router::mount(location);
    let _listener = router.listen();

    info!(
        api = %asset_base,
        route = %router.current().page_id,
        "session started"
    );

    let mut session = Session::new(
        router,
        PostLoader::new(Arc::new(api)),
        Arc::new(SystemClock),
        ReviewOptions::from(&settings.review),
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = io::stdout().lock();
    console::run(&mut session, &asset_base, input, &mut output).await?;

    info!("session ended");
    Ok(())
}

async fn run_posts(api: PostsApi) -> Result<(), AppError> {
    let posts = api
        .fetch_posts()
        .await
        .map_err(|err| InfraError::http(err.to_string()))?;
    let body = serde_json::to_string_pretty(&PostsResponse { posts })
        .map_err(|err| AppError::unexpected(format!("failed to encode posts: {err}")))?;
    println!("{body}");
    Ok(())
}
