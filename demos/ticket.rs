use ticketqr::config::Config;
use ticketqr::ticket::{TicketCode, TICKET_SYMBOL_SIZE};

/// Issue a ticket code and print the data URL shown on its ticket card.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load();
    let code = TicketCode::generate();
    println!("{}", code);
    println!("{}", code.validation_url(&config.links.origin));
    println!(
        "{}",
        code.symbol(&config.links.origin, TICKET_SYMBOL_SIZE).unwrap()
    );
}
