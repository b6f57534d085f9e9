//! Categories command - prints every accepted label with its code

use crate::domain::{Category, CategoryTable};

/// Print the three category tables
pub async fn run() -> anyhow::Result<()> {
    super::bootstrap()?;

    for category in Category::ALL {
        print!("{}", render_table(category.table()));
    }

    Ok(())
}

fn render_table(table: &CategoryTable) -> String {
    let mut out = format!("{} ({} values)\n", table.category(), table.labels().len());

    for (label, code) in table.entries() {
        out.push_str(&format!("  {:>2}  {}\n", code.value(), label));
    }

    out
}
