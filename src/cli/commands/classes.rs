use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::hierarchy::{DEPARTMENTS, Level, Node};
use crate::ui::messages::{info, success};

use super::selection_from;

/// Handle the `classes` command
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Classes { class, tree } = cmd {
        if *tree {
            print_tree(DEPARTMENTS, 0);
            return Ok(());
        }

        let selection = selection_from(class, None)?;
        let selector = &selection.classes;

        match selector.next_level() {
            Some(level) => {
                let chosen: Vec<&str> = Level::ALL[..level.depth()]
                    .iter()
                    .filter_map(|l| selector.selected(*l))
                    .collect();
                if !chosen.is_empty() {
                    info(format!("Selected: {}", chosen.join(" / ")));
                }
                println!("{} options:", level.label());
                for name in selector.option_names(level) {
                    println!("  - {}", name);
                }
            }
            None => {
                if let Some(identity) = selector.identity() {
                    success(format!("Class: {}", identity.display_name()));
                    println!("Identifier: {}", identity.key());
                }
            }
        }
    }
    Ok(())
}

fn print_tree(nodes: &[Node], depth: usize) {
    for n in nodes {
        println!("{}{}", "  ".repeat(depth), n.name);
        // semesters are printed inline to keep the tree readable
        if n.children.iter().all(Node::is_leaf) && !n.children.is_empty() {
            let sems: Vec<&str> = n.children.iter().map(|c| c.name).collect();
            println!("{}{}", "  ".repeat(depth + 1), sems.join(", "));
        } else {
            print_tree(n.children, depth + 1);
        }
    }
}
