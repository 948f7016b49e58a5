use rolodex::{HttpSeed, JsonStore, Roster, SeedSource, UserRecord, UserStore, DEFAULT_SEED_URL};

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to the user collection file to operate on
    #[clap(value_parser)]
    path: PathBuf,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Read and display all user records
    List,
    /// Display one record in full
    Show(ById),
    /// Remove a record
    Remove(ById),
    /// Fetch the seed collection and overwrite the file
    Seed(Seed)
}

#[derive(Args, Debug)]
struct ById {
    /// Id of the user record
    #[clap(value_parser)]
    id: u64
}

#[derive(Args, Debug)]
struct Seed {
    /// Where to fetch the seed collection from
    #[clap(long, value_parser, default_value_t = String::from(DEFAULT_SEED_URL))]
    url: String
}

fn print_summary(user: &UserRecord) {
    println!("{:>4}  {}  {}",
        user.id.to_string().bold(),
        user.name,
        user.email.dimmed());
}

fn print_full(user: &UserRecord) {
    println!("{}", user.name.bold());
    println!("  username: {}", user.username);
    println!("  email:    {}", user.email);
    println!("  phone:    {}", user.phone);
    println!("  website:  {}", user.website);
    println!("  address:  {}, {}, {} {}",
        user.address.street, user.address.suite,
        user.address.city, user.address.zipcode);
    println!("  company:  {} ({})", user.company.name, user.company.catch_phrase);
}

fn load(store: &JsonStore) -> anyhow::Result<Roster> {
    store.read_all()
        .with_context(|| format!("failed to load {}", store.path().display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let store = JsonStore::new(&args.path);

    match args.action {
        Subcommands::List => {
            let roster = load(&store)?;
            for user in roster.users() {
                print_summary(user);
            }
        },
        Subcommands::Show(by_id) => {
            let roster = load(&store)?;
            let user = roster.find(by_id.id)
                .with_context(|| format!("no user with id {}", by_id.id))?;
            print_full(user);
        },
        Subcommands::Remove(by_id) => {
            let mut roster = load(&store)?;
            let removed = roster.remove(by_id.id)?;
            store.write_all(&roster)?;
            println!("removed {}", removed);
        },
        Subcommands::Seed(seed) => {
            let roster = HttpSeed::new(&seed.url).fetch().await?;
            store.write_all(&roster)?;
            println!("wrote {} seed records to {}", roster.len(), args.path.display());
        }
    }

    return Ok(());
}
