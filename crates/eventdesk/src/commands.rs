//! Command handlers for CLI subcommands.
//!
//! Each invocation is one session: the store is loaded once, mutations stay
//! in memory and are gone when the process exits.

use std::fmt::Write as _;
use std::sync::Arc;

use eventdesk_models::Event;
use eventdesk_store::{EventSource, EventStore, HttpEventSource, StaticEventSource};
use eventdesk_views::display;
use eventdesk_views::{
    DetailsViewModel, FormField, FormViewModel, ListViewModel, Notice, NoticeLevel, Outcome,
    Route, UploadItem, ViewError,
};
use tracing::{debug, info};

use crate::cli::{Cli, Commands, CreateArgs, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let store = connect(cli).await?;

    match &cli.command {
        Commands::List {
            search,
            visibility,
            sort,
            page,
            format,
        } => {
            let mut list = ListViewModel::new(Arc::clone(&store));
            list.set_search(search.clone().unwrap_or_default());
            list.set_visibility((*visibility).into());
            list.set_sort((*sort).into());
            list.set_page(*page);
            print!("{}", render_list(&list, *format)?);
            Ok(())
        }
        Commands::Show { id } => cmd_show(&store, id, &cli.origin),
        Commands::Create(args) => cmd_create(&store, args),
        Commands::Delete { id } => cmd_delete(&store, id),
        Commands::Open { path } => cmd_open(&store, path, &cli.origin),
    }
}

/// Builds the source from the global flags and loads the store.
pub async fn connect(cli: &Cli) -> Result<Arc<EventStore>> {
    let config = cli.store_config();
    let source: Arc<dyn EventSource> = match &cli.feed {
        Some(path) => Arc::new(StaticEventSource::from_path(path)),
        None => Arc::new(HttpEventSource::new(&config.endpoint)?),
    };
    info!(source = %source.describe(), tenant = %config.tenant_id, "loading events");

    Ok(Arc::new(EventStore::connect(config, source).await))
}

fn cmd_show(store: &Arc<EventStore>, id: &str, origin: &str) -> Result<()> {
    let details = DetailsViewModel::open(store, Some(id))?;
    print!("{}", render_details(&details, origin));
    Ok(())
}

fn cmd_create(store: &Arc<EventStore>, args: &CreateArgs) -> Result<()> {
    let mut form = fill_form(FormViewModel::create(Arc::clone(store)), args);
    let outcome = form.submit();

    if outcome == Outcome::none() {
        eprint!("{}", render_form_errors(&form));
        return Err("event form has validation errors".into());
    }
    print_notice(&outcome);

    if let Some(event) = store.snapshot().last() {
        print!("{}", render_event_summary(event));
    }
    Ok(())
}

fn cmd_delete(store: &Arc<EventStore>, id: &str) -> Result<()> {
    let mut list = ListViewModel::new(Arc::clone(store));
    let outcome = list.delete(id);
    print_notice(&outcome);
    print!("{}", render_list(&list, OutputFormat::Table)?);

    match outcome.notice {
        Some(notice) if notice.is_error() => Err(notice.message.into()),
        _ => Ok(()),
    }
}

fn cmd_open(store: &Arc<EventStore>, path: &str, origin: &str) -> Result<()> {
    let route = Route::parse(path).ok_or_else(|| format!("unknown route: {}", path))?;
    debug!(route = %route, "opening route");

    let screen = match &route {
        Route::List => Ok(render_list(&ListViewModel::new(Arc::clone(store)), OutputFormat::Table)?),
        Route::Create | Route::Edit(_) => {
            FormViewModel::for_route(Arc::clone(store), &route).map(|form| render_form(&form))
        }
        Route::Details(_) => {
            DetailsViewModel::for_route(store, &route).map(|details| render_details(&details, origin))
        }
    };

    match screen {
        Ok(text) => print!("{}", text),
        Err(err) => follow(store, err)?,
    }
    Ok(())
}

/// Shows a view error's notice and the screen it redirects to.
fn follow(store: &Arc<EventStore>, err: ViewError) -> Result<()> {
    let outcome = err.outcome();
    print_notice(&outcome);
    if outcome.navigate == Some(Route::List) {
        print!(
            "{}",
            render_list(&ListViewModel::new(Arc::clone(store)), OutputFormat::Table)?
        );
    }
    Ok(())
}

fn fill_form(mut form: FormViewModel, args: &CreateArgs) -> FormViewModel {
    let text = [
        (FormField::Title, &args.title),
        (FormField::Description, &args.description),
        (FormField::Timezone, &args.timezone),
        (FormField::VenueName, &args.venue_name),
        (FormField::VenueAddress, &args.address),
        (FormField::VenueCity, &args.city),
        (FormField::VenueState, &args.state),
        (FormField::VenueCountry, &args.country),
        (FormField::VenuePostalCode, &args.postal_code),
    ];
    for (field, value) in text {
        form.set_text(field, value.as_str());
    }

    form.set_start_date(args.start_date);
    form.set_start_time(args.start_time);
    form.set_end_date(args.end_date);
    form.set_end_time(args.end_time);
    form.set_public(!args.private);

    form.handle_primary_image_upload(&UploadItem {
        name: "primary".to_string(),
        url: args.primary_image.clone(),
    });
    form.handle_cover_image_upload(&UploadItem {
        name: "cover".to_string(),
        url: args.cover_image.clone(),
    });
    form
}

fn print_notice(outcome: &Outcome) {
    if let Some(notice) = &outcome.notice {
        match notice.level {
            NoticeLevel::Success => println!("{}", render_notice(notice)),
            NoticeLevel::Error => eprintln!("{}", render_notice(notice)),
        }
    }
}

fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("OK: {}", notice.message),
        NoticeLevel::Error => format!("Error: {}", notice.message),
    }
}

/// Renders the current page of the list.
pub fn render_list(list: &ListViewModel, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(list.page_rows())?));
    }

    if list.is_empty() {
        return Ok("No events found.\n".to_string());
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<22}  {:<30}  {:<10}  {:<8}  START",
        "ID", "TITLE", "STATUS", "VISIBLE"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;
    for event in list.page_rows() {
        writeln!(
            out,
            "{:<22}  {:<30}  {:<10}  {:<8}  {}",
            truncate(&event.id, 22),
            truncate(&event.title, 30),
            truncate(&event.status, 10),
            list.visibility_tag(event).text,
            display::format_date(&event.start_date_time)
        )?;
    }
    writeln!(
        out,
        "\nPage {} of {}, {} event(s)",
        list.page(),
        list.page_count(),
        list.total()
    )?;
    Ok(out)
}

/// Renders the details screen.
pub fn render_details(details: &DetailsViewModel, origin: &str) -> String {
    let event = details.event();
    let visibility = details.visibility_tag();

    let mut lines = vec![
        event.title.clone(),
        "=".repeat(event.title.chars().count().max(3)),
        format!(
            "Status:     {} ({})",
            event.status,
            details.status_color().as_str()
        ),
        format!("Visibility: {}", visibility.text),
        format!("Starts:     {} {}", details.start_date(), details.start_time()),
        format!("Ends:       {} {}", details.end_date(), details.end_time()),
        format!("Timezone:   {}", event.timezone),
        format!("Venue:      {}", event.venue.venue_name),
        format!("Address:    {}", details.venue_full_address()),
        String::new(),
        event.description.clone(),
        String::new(),
        format!(
            "Tickets: {}  Capacity: {}  Sold: {}  Leads: {}",
            details.ticket_count(),
            details.total_capacity(),
            details.total_sales(),
            details.lead_count()
        ),
        format!("Added:   {}", details.added_at()),
    ];
    if let Some(updated) = details.updated_at() {
        lines.push(format!("Updated: {}", updated));
    }
    if let Some(link) = details.public_link(origin) {
        lines.push(format!("Link:    {}", link));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the form with its current values and visible errors.
pub fn render_form(form: &FormViewModel) -> String {
    let mut out = format!("{}\n", form.page_title());
    for field in FormField::ALL {
        out.push_str(&format!(
            "  {:<14} {}\n",
            format!("{}:", field.label()),
            form.values().display_value(field)
        ));
        for error in form.visible_errors(field) {
            out.push_str(&format!("  {:<14} ! {}\n", "", error));
        }
    }
    out
}

fn render_form_errors(form: &FormViewModel) -> String {
    let mut out = String::new();
    for field in FormField::ALL {
        for error in form.visible_errors(field) {
            out.push_str(&format!("{}: {}\n", field.label(), error));
        }
    }
    out
}

fn render_event_summary(event: &Event) -> String {
    format!(
        "{}  {}\n  {} - {} ({})\n  {}\n",
        event.id,
        event.title,
        display::format_date_time(&event.start_date_time),
        display::format_date_time(&event.end_date_time),
        event.timezone,
        event.venue.full_address()
    )
}

/// Truncates a string to the given length, adding "..." if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
