use anyhow::Context;
use clap::{Parser, Subcommand};
use shelf_app::{Book, Catalog, Directory, Price, User};
use shelf_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "shelf", version, about = "Book catalog and user directory tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved settings as JSON
    Settings,
    /// Run a purchase and review walkthrough against a fresh catalog
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load shelf settings")?;
    shelf_telemetry::init(&settings.telemetry)?;

    match cli.command {
        Command::Settings => {
            let rendered = serde_json::to_string_pretty(&settings)
                .with_context(|| "failed to render settings")?;
            println!("{rendered}");
        }
        Command::Demo => run_demo(&settings)?,
    }

    Ok(())
}

fn outcome<T, E: std::fmt::Display>(result: &Result<T, E>) -> String {
    match result {
        Ok(_) => "ok".to_string(),
        Err(err) => format!("rejected ({err})"),
    }
}

fn run_demo(settings: &Settings) -> anyhow::Result<()> {
    tracing::info!(env = ?settings.environment, "running demo");

    let windows = Book::new(
        "Windows",
        "Harley Jarvis",
        "Fiction",
        Price::from_cents(1000),
    );
    let java = Book::new(
        "Java",
        "Marley Marvin",
        "Non-Fiction",
        Price::from_cents(2000),
    );

    let mut catalog = Catalog::with_settings(&settings.catalog);
    for book in [windows.clone(), java.clone()] {
        println!("add {}: {}", book.title(), outcome(&catalog.add_book(book.clone())));
    }

    let mut directory = Directory::new();
    let reader = directory
        .register_user(User::new("reader", "secret", "reader@example.com"))
        .with_context(|| "failed to register demo user")?;

    let hits: Vec<String> = catalog
        .search_book("Windows")
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("search Windows: [{}]", hits.join(", "));

    println!(
        "purchase Windows: {}",
        outcome(&catalog.purchase_book(&reader, &windows))
    );
    println!(
        "review Windows: {}",
        outcome(&catalog.add_book_review(&reader, &windows, "great"))
    );
    println!(
        "review Java: {}",
        outcome(&catalog.add_book_review(&reader, &java, "nice"))
    );

    let login = directory.login_user("reader", "secret");
    println!(
        "login reader: {}",
        if login.is_some() { "ok" } else { "rejected" }
    );

    Ok(())
}
