use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use venn_rs::entities::VennInstance;
use venn_rs::layout::{label_anchors, scale_solution, solve};
use vennfit::config::VennfitConfig;
use vennfit::io;
use vennfit::io::cli::Cli;
use vennfit::io::ext_repr::{ExtAnchor, ExtCircle, ExtSolution};
use vennfit::io::output::Output;
use vennfit::io::svg_export::solution_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            VennfitConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    info!("[MAIN] successfully parsed config: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = VennInstance::new(&ext_instance.regions)?;

    let solution = solve(&instance, &config.layout)?;
    let scaled = scale_solution(
        &solution.circles,
        config.width,
        config.height,
        config.padding,
    );
    let anchors = label_anchors(&instance, &scaled);

    let ext_solution = ExtSolution {
        circles: instance
            .sets
            .iter()
            .zip(scaled.iter())
            .map(|(s, c)| ExtCircle {
                set: s.id.clone(),
                x: c.center.0,
                y: c.center.1,
                radius: c.radius,
            })
            .collect(),
        anchors: anchors
            .iter()
            .map(|a| ExtAnchor {
                x: a.pos.0,
                y: a.pos.1,
                disjoint: a.disjoint,
            })
            .collect(),
        residual_loss: solution.residual_loss,
    };

    let document = solution_to_svg(&ext_instance, &ext_solution, config.width, config.height);

    let output = Output {
        instance: ext_instance,
        solution: ext_solution,
        config,
    };

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
    io::write_svg(&document, &svg_path)?;

    Ok(())
}
