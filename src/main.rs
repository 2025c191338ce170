/*
 * File: /main.rs
 * Created Date: Sunday, July 20th 2025
 * Author: Zihan
 * -----
 * Last Modified: Sunday, 20th July 2025 5:10:44 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::env;
use std::error::Error;

use chrono::Local;
use log::{info, LevelFilter};

use fast_nmf::config::Config;
use fast_nmf::factor::NmfEngine;

fn setup_logger() -> Result<(), log::SetLoggerError> {
    // RUST_LOG overrides the default level
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logger()?;

    let config = Config::new(env::args())?;
    let method = "nmf";
    info!(
        "[method: {}] [{}] Input: {} ({}x{}), rank {}",
        method,
        timestamp(),
        config.source(),
        config.matrix().rows(),
        config.matrix().cols(),
        config.rank()
    );

    let nmf_config = config.nmf_config();
    let mut engine = NmfEngine::new(config.into_matrix(), nmf_config)?;
    let summary = engine.factorize()?;
    info!(
        "[method: {}] [{}] Factorized in {:.3}s, W row-norm spread {:.4}",
        method,
        timestamp(),
        summary.elapsed.as_secs_f64(),
        summary.w_row_norm_spread
    );

    println!("{}", engine);
    println!(
        "Reconstruction error (Frobenius norm): {}",
        summary.reconstruction_error
    );
    println!("Relative reconstruction error: {}", summary.relative_error);
    Ok(())
}
