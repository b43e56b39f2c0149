use std::process::ExitCode;

use tintscale::error::PaletteError;
use tintscale::scale::generate_scale;
use tintscale::state::PaletteUrlState;
use tintscale::tokens::{to_css_variables, to_json_tokens, to_string_pretty};
use tintscale::{rate_swatches, DEFAULT_FOREGROUND};

fn run(query: &str) -> Result<(), PaletteError> {
    let state = PaletteUrlState::from_query(query);
    let scale = generate_scale(&state.base_color, &state.to_scale_options())?;

    println!("{} in {} steps, shift {}", state.base_color, state.count, state.shift);
    for swatch in rate_swatches(scale.entries(), DEFAULT_FOREGROUND)? {
        println!(
            "{:>8}  {}  {:>5.2}  {}",
            swatch.name, swatch.hex, swatch.ratio, swatch.rating
        );
    }

    println!("\n{}\n", to_css_variables("brand", scale.entries()));
    println!("{}", to_string_pretty(&to_json_tokens("brand", scale.entries()))?);
    println!("\nshare: ?{}", state.to_query());
    Ok(())
}

fn main() -> ExitCode {
    let query = std::env::args().nth(1).unwrap_or_default();
    match run(&query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
