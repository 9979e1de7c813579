// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

fn amount(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(long).value_name("AMOUNT").help(help)
}

fn remember(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(long).action(ArgAction::SetTrue).help(help)
}

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

pub fn build_cli() -> Command {
    command!()
        .name("roombill")
        .about("Monthly room-rent calculator with a local billing history")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("calc")
                .about("Compute this month's bill and store it in the history")
                .arg(Arg::new("room").long("room").help("Room name"))
                .arg(amount("rent", "rent", "Room rent (VND)"))
                .arg(amount("elec_old", "elec-old", "Previous electricity reading (kWh)"))
                .arg(amount("elec_new", "elec-new", "Current electricity reading (kWh)"))
                .arg(amount("elec_price", "elec-price", "Electricity price per kWh; defaults to the saved price"))
                .arg(amount("water_old", "water-old", "Previous water reading (m³)"))
                .arg(amount("water_new", "water-new", "Current water reading (m³)"))
                .arg(amount("water_price", "water-price", "Water price per m³; defaults to the saved price"))
                .arg(amount("bike", "bike", "Bike parking fee; defaults to the saved fee"))
                .arg(amount("trash", "trash", "Trash fee; defaults to the saved fee"))
                .arg(amount("wifi", "wifi", "WiFi fee"))
                .arg(remember("save_elec_price", "save-elec-price", "Remember the electricity price"))
                .arg(remember("save_water_price", "save-water-price", "Remember the water price"))
                .arg(remember("save_bike_fee", "save-bike-fee", "Remember the bike fee"))
                .arg(remember("save_trash_fee", "save-trash-fee", "Remember the trash fee"))
                .args(json_flags()),
        )
        .subcommand(
            Command::new("history")
                .about("Review and edit past calculations")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("search").long("search").help("Filter by room, date or total"))
                        .arg(
                            Arg::new("hide")
                                .long("hide")
                                .action(ArgAction::Append)
                                .value_name("COLUMN")
                                .help("Hide a column (roomName, date, roomRent, elecUsage, waterUsage, bikeFee, trashFee, wifiFee, total)"),
                        )
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete one or more records")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .action(ArgAction::Append),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Overwrite fields of a record (total is not recomputed)")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("room").long("room"))
                        .arg(Arg::new("rent").long("rent"))
                        .arg(Arg::new("elec_usage").long("elec-usage"))
                        .arg(Arg::new("water_usage").long("water-usage"))
                        .arg(Arg::new("bike").long("bike"))
                        .arg(Arg::new("trash").long("trash"))
                        .arg(Arg::new("wifi").long("wifi")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the history")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").default_value("rent_history.csv"))
                .arg(Arg::new("search").long("search")),
        )
        .subcommand(
            Command::new("prices")
                .about("Remembered unit prices and fees")
                .subcommand_required(true)
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("words")
                .about("Read an amount aloud in Vietnamese")
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(Command::new("doctor").about("Report invalid or inconsistent history entries"))
}
