use crate::cli::parser::{Commands, HistoryKind};
use crate::config::Config;
use crate::core::App;
use crate::core::table::{self, PageItem, Pager, PaginationState, RenderModel};
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        kind,
        search,
        column,
        value,
        page,
        per_page,
    } = cmd
    {
        let app = App::load(cfg);
        let record = app.current_record()?;

        let mut state = PaginationState::new(per_page.unwrap_or(cfg.entries_per_page));
        if let Some(term) = search {
            state.set_search(term);
        }
        if let (Some(column), Some(value)) = (column, value) {
            state.set_filter(column, value);
        }
        state.go_to_page(*page);

        let model = match kind {
            HistoryKind::Kit => table::recompute(&record.history.kit_calculations, &mut state),
            HistoryKind::Phone => table::recompute(&record.history.phone_generations, &mut state),
        };

        render(&model, kind);
    }
    Ok(())
}

fn render(model: &RenderModel, kind: &HistoryKind) {
    if model.rows.is_empty() {
        match kind {
            HistoryKind::Kit => println!("No calculations found"),
            HistoryKind::Phone => println!("No phone numbers found"),
        }
    } else {
        let mut headers = vec!["#"];
        headers.extend(model.headers.iter().copied());

        let mut table = Table::new(headers);
        for row in &model.rows {
            let mut cells = vec![row.entry.to_string()];
            cells.extend(row.cells.iter().cloned());
            table.add_row(cells);
        }
        print!("{}", table.render());
    }

    println!("{}", model.summary());
    if model.pager.total_pages > 1 {
        println!("{}", render_pager(&model.pager));
    }
}

fn render_pager(pager: &Pager) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(if pager.prev_enabled { "<".into() } else { "|".into() });
    for item in &pager.items {
        match item {
            PageItem::Page(page) if *page == pager.current => parts.push(format!("[{page}]")),
            PageItem::Page(page) => parts.push(page.to_string()),
            PageItem::Ellipsis => parts.push("...".into()),
        }
    }
    parts.push(if pager.next_enabled { ">".into() } else { "|".into() });

    format!("Pages: {}", parts.join(" "))
}
