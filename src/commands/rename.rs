use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use modcon::log_status;
use modcon::rename::RenameOp;
use modcon::report::{self, Message, RunStatus};
use modcon::scene::Scene;
use modcon::scope::{DataKind, ScopeMode, ScopeQuery, TargetKind};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RenameArgs {
    /// Scene document to operate on
    #[arg(long)]
    pub scene: PathBuf,

    /// Target: objects, bones (default: objects)
    #[arg(long, default_value = "objects")]
    pub target: String,

    /// Scope: selected, all (default: selected)
    #[arg(long, default_value = "selected")]
    pub scope: String,

    /// Data kind: modifiers, constraints (default: modifiers; forced to
    /// constraints when targeting bones)
    #[arg(long, default_value = "modifiers")]
    pub data: String,

    /// Operation: find-replace, prefix, suffix
    #[arg(long)]
    pub op: String,

    /// Substring to find (find-replace)
    #[arg(long, default_value = "")]
    pub find: String,

    /// Replacement string (find-replace)
    #[arg(long, default_value = "")]
    pub replace: String,

    /// Prefix to prepend (prefix)
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Suffix to append (suffix)
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Write the renamed scene back to the file (default is dry-run)
    #[arg(long)]
    pub write: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "rename")]
    Rename {
        status: RunStatus,
        renamed: usize,
        unsupported: usize,
        messages: Vec<Message>,
        dry_run: bool,
        applied: bool,
    },
}

pub fn run(args: RenameArgs) -> CmdResult<RenameOutput> {
    let target = TargetKind::from_str(&args.target)?;
    let scope = ScopeMode::from_str(&args.scope)?;
    let data = DataKind::from_str(&args.data)?;
    let query = ScopeQuery::new(target, scope, data);
    let op = RenameOp::from_parts(
        &args.op,
        &args.find,
        &args.replace,
        &args.prefix,
        &args.suffix,
    )?;

    let mut scene = Scene::load(&args.scene)?;
    log_status!(
        "rename",
        "Loaded scene with {} objects from {}",
        scene.objects.len(),
        args.scene.display()
    );

    let report = report::run(&mut scene, &query, &op);

    let applied = if args.write && report.status == RunStatus::Finished {
        scene.save(&args.scene)?;
        log_status!("rename", "Wrote scene back to {}", args.scene.display());
        true
    } else {
        false
    };

    let exit_code = match report.status {
        RunStatus::Finished => 0,
        RunStatus::Cancelled => 1,
    };

    Ok((
        RenameOutput::Rename {
            status: report.status,
            renamed: report.renamed,
            unsupported: report.unsupported,
            messages: report.messages,
            dry_run: !args.write,
            applied,
        },
        exit_code,
    ))
}
