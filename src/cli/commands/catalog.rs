use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CATALOG;
use crate::errors::AppResult;
use crate::models::line_item::{Category, LineItemDefinition};
use crate::utils::formatting::{bold, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Catalog) {
        let mut groups: Vec<(Category, Vec<&LineItemDefinition>)> = Vec::new();
        for item in CATALOG {
            match groups.iter_mut().find(|(c, _)| *c == item.category()) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category(), vec![item])),
            }
        }

        for (category, items) in groups {
            println!("\n{}", bold(category.title()));

            let mut table = Table::new(vec![
                Column::left("Key"),
                Column::left("Item"),
                Column::right("Min"),
                Column::right("Base"),
                Column::right("BBI"),
            ])
            .with_separator(cfg.separator());

            for item in items {
                table.add_row(vec![
                    item.key.to_string(),
                    item.label.to_string(),
                    item.minutes_per_unit.to_string(),
                    money(item.base_amount),
                    money(item.bbi_amount),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
