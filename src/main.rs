use std::io::{self, Read};
use anyhow::{Context, Result};

mod scratchpad;

fn main() -> Result<()> {
    //Read the tree dump piped in by waybar (swaymsg -t get_tree | waybar-scratchpad)
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read tree JSON from stdin")?;
    //count the scratchpad windows and print for the bar
    let count = scratchpad::count_scratchpads(&input)?;
    println!("{}", count);
    Ok(())
}
