use crate::demo::{run_courses, run_demo, run_recommend, CoursesArgs, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use course_placement::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Course Placement Advisor",
    about = "Rank KCSE course options from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank catalog courses for a student profile stored as JSON
    Recommend(RecommendArgs),
    /// List catalog courses with their cutoff trend and competitiveness
    Courses(CoursesArgs),
    /// Run recommendations for a built-in sample student
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Courses(args) => run_courses(args),
        Command::Demo(args) => run_demo(args),
    }
}
