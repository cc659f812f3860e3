use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use pseudo_vertical::cli::{CliArgs, Input, Operation, RunConfig};
use pseudo_vertical::commands::Cmd;
use pseudo_vertical::i18n::{t, Locale};
use pseudo_vertical::messages::{Msg, SelectionMsg};
use pseudo_vertical::model::{AppModel, Scene, TextObject};
use pseudo_vertical::update::update;
use pseudo_vertical::WritingConfig;

fn main() -> Result<()> {
    pseudo_vertical::tracing::init();

    let run = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let mut config = WritingConfig::load();
    run.apply_overrides(&mut config);
    let locale = Locale::resolve(config.locale.as_deref());

    let (scene, paths) = load_scene(&run.input)?;
    let mut model = AppModel::new(scene, config);
    update(&mut model, Msg::Selection(SelectionMsg::SelectAll));

    let Some(msg) = run.operation.writing_msg() else {
        return print_status(&model, &run);
    };

    let Some(Cmd::Report { report, .. }) = update(&mut model, Msg::Writing(msg)) else {
        return Ok(());
    };

    if run.in_place {
        for (object, path) in model.scene.objects.iter().zip(&paths) {
            if report.converted.contains(&object.name) {
                std::fs::write(path, &object.body)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        eprintln!(
            "{}: {}/{}",
            t(locale, run.operation.label_id()),
            report.converted.len(),
            model.scene.objects.len()
        );
    } else {
        write_bodies(&model, &run)?;
    }

    Ok(())
}

/// Build one `Font` object per input, named after its source
fn load_scene(input: &Input) -> Result<(Scene, Vec<PathBuf>)> {
    let mut scene = Scene::new();
    match input {
        Input::Stdin => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            scene.add_object(TextObject::font("<stdin>", body));
            Ok((scene, Vec::new()))
        }
        Input::Files(paths) => {
            for path in paths {
                let body = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                scene.add_object(TextObject::font(path.display().to_string(), body));
            }
            Ok((scene, paths.clone()))
        }
    }
}

fn write_bodies(model: &AppModel, run: &RunConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    let with_headers = matches!(&run.input, Input::Files(paths) if paths.len() > 1);
    for (i, object) in model.scene.objects.iter().enumerate() {
        if with_headers {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", object.name)?;
        }
        write!(out, "{}", object.body)?;
    }
    out.flush()?;
    Ok(())
}

fn print_status(model: &AppModel, run: &RunConfig) -> Result<()> {
    debug_assert_eq!(run.operation, Operation::Status);
    let statuses: Vec<_> = model.scene.selected_objects().map(|o| o.status()).collect();

    if run.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    for status in statuses {
        let state = if status.vertical {
            "vertical"
        } else {
            "horizontal"
        };
        println!("{}\t{}", status.name, state);
    }
    Ok(())
}
