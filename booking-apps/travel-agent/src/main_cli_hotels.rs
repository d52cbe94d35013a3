//!  Booking Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//!
//! # Examples
//!
//! ## Find a destination id
//!
//! ```bash
//! booking-hotels destinations "Paris"
//! ```
//!
//! ## Search hotels
//!
//! ```bash
//! booking-hotels hotels -d -1456928 -i 2026-03-01 -o 2026-03-05
//! ```
//!
//! ## Raw JSON, as returned by the MCP tools
//!
//! ```bash
//! booking-hotels --json hotels -d -1456928 -i 2026-03-01 -o 2026-03-05 -a 3
//! ```
//!
//! Credentials are read from `RAPIDAPI_KEY` and `RAPIDAPI_HOST` (a `.env`
//! file in the working directory is honored).

use anyhow::{Context, Result};
use booking_travel_agent::{
    ApiConfig, DEFAULT_ADULTS, ErrorEnvelope, Hotel, HotelSearchParams, Location, RapidApiClient,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "booking-hotels")]
#[command(version = "0.1.0")]
#[command(about = "Search destinations and hotels via the Booking.com RapidAPI")]
struct Args {
    #[arg(long, global = true, help = "Print raw JSON instead of a summary")]
    json: bool,
    #[arg(
        long,
        global = true,
        help = "Retry connection failures (3 attempts, 2s/4s backoff)"
    )]
    retry: bool,
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up destinations by city, country, area or region name
    Destinations { query: String },

    /// List hotels for a destination id
    Hotels {
        #[arg(short = 'd', long)]
        destination_id: String,
        #[arg(short = 'i', long)]
        checkin: String,
        #[arg(short = 'o', long)]
        checkout: String,
        #[arg(short = 'a', long, default_value_t = DEFAULT_ADULTS)]
        adults: u32,
    },
}

fn print_json<T: Serialize>(items: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

fn print_destinations(locations: &[Location]) {
    println!("Found {} destination(s)\n", locations.len());
    for (i, location) in locations.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            location.name.as_deref().unwrap_or("?"),
            location.kind.as_deref().unwrap_or("?")
        );
        if let Some(country) = &location.country {
            println!("   Country: {}", country);
        }
        if let Some(id) = location.destination_id {
            println!("   Destination id: {}", id);
        }
        if let Some(coords) = &location.coordinates {
            if let (Some(lat), Some(lon)) = (coords.lat, coords.lon) {
                println!("   Coordinates: {:.4}, {:.4}", lat, lon);
            }
        }
        println!();
    }
}

fn print_hotels(hotels: &[Hotel]) {
    println!("Found {} hotel(s)\n", hotels.len());
    for (i, hotel) in hotels.iter().enumerate() {
        println!("{}. {}", i + 1, hotel.hotel_name.as_deref().unwrap_or("?"));
        if let Some(stars) = hotel.rating {
            println!("   Class: {}", stars);
        }
        if let Some(price) = &hotel.price {
            println!("   Price: {}", price);
        }
        if let Some(score) = hotel.review_score {
            println!("   Review score: {:.1}", score);
        }
        if let Some(address) = &hotel.address {
            println!("   Address: {}", address);
        }
        println!("   Map: {}", hotel.maps_url);
        if let Some(url) = &hotel.booking_url {
            println!("   Book: {}", url);
        }
        println!();
    }
}

fn report_failure(envelope: &ErrorEnvelope, json: bool) -> ! {
    if json {
        println!("{}", envelope.to_json());
    } else {
        match envelope.status_code() {
            Some(status) => eprintln!("Search failed ({}): {}", status, envelope.message()),
            None => eprintln!("Search failed: {}", envelope.message()),
        }
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let config = ApiConfig::from_env();
    let client = match RapidApiClient::new(config) {
        Ok(client) => client.with_retries(args.retry),
        Err(e) => report_failure(&e, args.json),
    };

    match args.command {
        Command::Destinations { query } => {
            if !args.json {
                println!("\n🔎 Booking.com Destinations: {}", query);
                println!("=======================");
            }
            match client.search_destinations(&query).await {
                Ok(locations) if args.json => print_json(&locations)?,
                Ok(locations) => print_destinations(&locations),
                Err(e) => report_failure(&e, args.json),
            }
        }
        Command::Hotels {
            destination_id,
            checkin,
            checkout,
            adults,
        } => {
            let params = HotelSearchParams::new(destination_id, checkin, checkout).adults(adults);
            if !args.json {
                println!("\n🏨 Booking.com Hotels");
                println!("=======================");
                println!("Destination: {}", params.destination_id);
                println!("Dates: {} to {}", params.checkin_date, params.checkout_date);
                println!("Guests: {} adults, 1 room", params.adults);
                println!("=======================\n");
            }
            match client.search_hotels(&params).await {
                Ok(hotels) if args.json => print_json(&hotels)?,
                Ok(hotels) => print_hotels(&hotels),
                Err(e) => report_failure(&e, args.json),
            }
        }
    }
    Ok(())
}
