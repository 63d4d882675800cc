use knap_challenges::knapsack::Item;
use knap_structs::core::{OutputData, TablePreviewReport};
use std::fmt::Write;

const RULE_WIDTH: usize = 90;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Human-readable report of a solve run.
pub fn render(data: &OutputData) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, data);
    out
}

fn write_report(out: &mut String, data: &OutputData) -> std::fmt::Result {
    writeln!(out, "   0/1 KNAPSACK")?;
    writeln!(out, "Capacity (W) = {} kg", data.capacity)?;
    writeln!(out)?;
    write_items_table(out, &data.items)?;

    writeln!(out)?;
    writeln!(out, "RESULT (DYNAMIC PROGRAMMING):")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Optimal value   : {}", data.dp.solver.optimal_value)?;
    writeln!(out, "Total weight    : {} kg", data.dp.solver.total_weight)?;
    writeln!(out, "Chosen items    :")?;
    write_selection(out, &data.items, &data.dp.solver.items)?;
    writeln!(out, "DP time         : {:.3} ms", data.dp.solver.elapsed_ms)?;
    writeln!(out, "{}", rule())?;

    writeln!(out)?;
    writeln!(out, "BACKTRACKING TRACE:")?;
    for entry in &data.dp.trace {
        writeln!(out, "  {}", entry)?;
    }

    write_table_preview(out, &data.dp.table)?;

    writeln!(out)?;
    writeln!(out, "COMPARISON WITH BRUTE FORCE:")?;
    writeln!(out, "{}", rule())?;
    match &data.brute_force {
        Some(brute_force) => {
            writeln!(
                out,
                "Brute force optimal value : {}",
                brute_force.solver.optimal_value
            )?;
            writeln!(
                out,
                "Brute force total weight  : {} kg",
                brute_force.solver.total_weight
            )?;
            writeln!(out, "Items (brute force)       :")?;
            write_selection(out, &data.items, &brute_force.solver.items)?;
            writeln!(
                out,
                "Combinations checked      : {} (2^{})",
                brute_force.subsets_examined,
                data.items.len()
            )?;
            writeln!(
                out,
                "Brute force time          : {:.3} ms",
                brute_force.solver.elapsed_ms
            )?;
        }
        None => writeln!(out, "Brute force skipped for {} items", data.items.len())?,
    }
    writeln!(out, "{}", rule())?;

    writeln!(out)?;
    writeln!(out, "VALIDATION:")?;
    match data.agreed() {
        Some(true) => writeln!(out, "OK: DP = brute force (optimum verified).")?,
        Some(false) => writeln!(
            out,
            "MISMATCH: DP != brute force (check the implementation)."
        )?,
        None => writeln!(out, "not checked")?,
    }
    Ok(())
}

fn write_items_table(out: &mut String, items: &[Item]) -> std::fmt::Result {
    writeln!(out, "ITEMS (with value/weight ratio):")?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "{:<5} {:<30} {:>6} {:>7} {:>12}",
        "Code", "Name", "Weight", "Value", "Ratio(v/w)"
    )?;
    writeln!(out, "{}", rule())?;
    for item in items {
        writeln!(
            out,
            "{:<5} {:<30} {:>6} {:>7} {:>12.2}",
            item.code(),
            item.name(),
            item.weight(),
            item.value(),
            item.ratio()
        )?;
    }
    writeln!(out, "{}", rule())
}

fn write_selection(out: &mut String, items: &[Item], codes: &[String]) -> std::fmt::Result {
    for code in codes {
        match items.iter().find(|item| item.code() == code) {
            Some(item) => writeln!(
                out,
                "  - {} | {} | w={} | v={}",
                item.code(),
                item.name(),
                item.weight(),
                item.value()
            )?,
            None => writeln!(out, "  - {}", code)?,
        }
    }
    Ok(())
}

fn write_table_preview(out: &mut String, table: &TablePreviewReport) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "DP TABLE PREVIEW (rows=items, columns=capacity):")?;
    if table.truncated {
        writeln!(out, "(truncated)")?;
    }
    let cols = table.preview.first().map_or(0, Vec::len);
    let mut header = "cap |".to_string();
    for c in 0..cols {
        write!(header, " {:>3}", c)?;
    }
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.len()))?;
    for (i, row) in table.preview.iter().enumerate() {
        write!(out, "{:>3} |", i)?;
        for cell in row {
            write!(out, " {:>3}", cell)?;
        }
        writeln!(out)?;
    }
    if table.truncated {
        writeln!(
            out,
            "... (full {} x {} table not shown)",
            table.rows, table.cols
        )?;
    }
    Ok(())
}
