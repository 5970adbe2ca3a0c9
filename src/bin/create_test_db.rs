use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use gofinances_rs::{
    Category, RawTransaction, TransactionType, UserId, append_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of gofinances_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The ID of the user that owns the sample transactions.
    #[arg(long, default_value = "test-user")]
    user_id: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let user_id = UserId::new(&args.user_id)?;

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Adding sample transactions for user {user_id}...");

    for transaction in sample_transactions() {
        append_transaction(&conn, &user_id, transaction)?;
    }

    println!("Success!");

    Ok(())
}

fn sample_transactions() -> Vec<RawTransaction> {
    vec![
        RawTransaction {
            id: "1".to_owned(),
            name: "Desenvolvimento de Site".to_owned(),
            amount: "12000".to_owned(),
            transaction_type: TransactionType::Positive,
            category: Category {
                name: "Vendas".to_owned(),
                icon: "dollar-sign".to_owned(),
            },
            date: "2020-04-13".to_owned(),
        },
        RawTransaction {
            id: "2".to_owned(),
            name: "Hamburgueria Pizzy".to_owned(),
            amount: "59".to_owned(),
            transaction_type: TransactionType::Negative,
            category: Category {
                name: "Alimentação".to_owned(),
                icon: "coffee".to_owned(),
            },
            date: "2020-04-10".to_owned(),
        },
        RawTransaction {
            id: "3".to_owned(),
            name: "Aluguel do Apartamento".to_owned(),
            amount: "1200".to_owned(),
            transaction_type: TransactionType::Negative,
            category: Category {
                name: "Casa".to_owned(),
                icon: "shopping-bag".to_owned(),
            },
            date: "2020-04-10".to_owned(),
        },
    ]
}
