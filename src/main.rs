//! # Chequier CLI
//!
//! Command-line interface for composing and printing bank checks.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive preview with draggable anchors
//! chequier preview --template bna --amount 11800 --beneficiary "Mohammed Benali"
//!
//! # Print without opening a window
//! chequier print --template ccp --amount 2500 --beneficiary "SARL Exemple" --copies 2
//!
//! # Compose to a PNG for inspection (no printer needed)
//! chequier render --template bdr --amount 11800 --png out.png
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use chequier::{
    app::CheckForm,
    preview::window,
    printer::{self, PrintOptions},
    resources::ResourceLocator,
    template::{PositionTable, TemplateId},
    ChequierError,
};

/// Chequier - bank check composing and printing utility
#[derive(Parser, Debug)]
#[command(name = "chequier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Field values shared by all subcommands.
#[derive(Args, Debug)]
struct FieldArgs {
    /// Check amount in dinars
    #[arg(long, default_value_t = 11800.0)]
    amount: f64,

    /// Beneficiary ("à l'ordre de")
    #[arg(long, default_value = "")]
    beneficiary: String,

    /// Issuing location ("fait à")
    #[arg(long, default_value = "Alger")]
    location: String,

    /// Check date, dd/mm/yyyy (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Check template: bdr, bna, or ccp (default layout when omitted)
    #[arg(long)]
    template: Option<String>,
}

#[derive(Args, Debug)]
struct PrintArgs {
    /// Destination printer name (system default when omitted)
    #[arg(long)]
    printer: Option<String>,

    /// Number of copies
    #[arg(long, default_value_t = 1)]
    copies: u32,

    /// Render resolution in DPI
    #[arg(long, default_value_t = 300)]
    dpi: u32,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive preview window
    Preview {
        #[command(flatten)]
        fields: FieldArgs,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Compose and print the check without opening a window
    Print {
        #[command(flatten)]
        fields: FieldArgs,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Compose the check to a PNG file
    Render {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Render resolution in DPI
        #[arg(long, default_value_t = 150)]
        dpi: u32,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChequierError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { fields, print } => {
            let form = build_form(&fields);
            window::run(form, print_options(&print))
        }
        Commands::Print { fields, print } => {
            let form = build_form(&fields);
            let positions = PositionTable::for_template(form.template());
            let ack = printer::print_check(
                &form.snapshot(),
                &positions,
                form.background(),
                &print_options(&print),
            )?;
            println!("L'impression a été envoyée. {ack}");
            Ok(())
        }
        Commands::Render { fields, png, dpi } => {
            let form = build_form(&fields);
            let positions = PositionTable::for_template(form.template());
            let options = PrintOptions { dpi, ..Default::default() };
            let canvas =
                printer::compose_page(&form.snapshot(), &positions, form.background(), &options);
            canvas.save_png(&png)?;
            println!("Saved to {}", png.display());
            Ok(())
        }
    }
}

fn print_options(print: &PrintArgs) -> PrintOptions {
    PrintOptions {
        printer: print.printer.clone(),
        copies: print.copies,
        dpi: print.dpi,
        ..Default::default()
    }
}

/// Build the form controller from command-line field values. Template
/// problems (unknown label, missing image) degrade to the default layout
/// with a console warning, same as in the window.
fn build_form(fields: &FieldArgs) -> CheckForm {
    let mut form = CheckForm::new(ResourceLocator::discover());

    form.amount_text = format!("{:.2}", fields.amount);
    form.beneficiary = fields.beneficiary.clone();
    form.location = fields.location.clone();
    if let Some(date) = &fields.date {
        match NaiveDate::parse_from_str(date, "%d/%m/%Y") {
            Ok(parsed) => form.date_text = parsed.format("%d/%m/%Y").to_string(),
            Err(_) => eprintln!("Date invalide '{date}', la date du jour sera utilisée"),
        }
    }

    let template = fields.template.as_deref().and_then(|label| {
        let id = TemplateId::from_label(label);
        if id.is_none() {
            eprintln!("Modèle inconnu '{label}', mise en page par défaut");
        }
        id
    });
    if let Some(notice) = form.select_template(template) {
        eprintln!("{}", notice.message);
    }

    form
}
