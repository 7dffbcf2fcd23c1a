use std::env;
use std::fs;
use std::path::Path;

use clap::CommandFactory;

// The command tree lives in cli.rs, which depends only on clap and
// clap_complete (both build-dependencies), so it can be compiled into
// the build script without the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo");
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    // Walk the command tree with a worklist, prefixing each subcommand
    // with its parent so pages land as e.g. `deskline-tickets-assign.1`.
    let mut pending = vec![cli::Cli::command()];
    while let Some(cmd) = pending.pop() {
        let name = cmd.get_name().to_owned();

        for sub in cmd.get_subcommands() {
            if sub.is_hide_set() {
                continue;
            }
            pending.push(sub.clone().name(format!("{name}-{}", sub.get_name())));
        }

        let mut rendered = Vec::new();
        clap_mangen::Man::new(cmd)
            .render(&mut rendered)
            .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));

        let page = man_dir.join(format!("{name}.1"));
        fs::write(&page, rendered)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", page.display()));
    }
}
