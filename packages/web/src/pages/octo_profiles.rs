//! Octo Browser profiles table page

use dashboard_core::{
    PageSize, Profile, ProfileRow, ProfileTable, SortDirection, SortField, TableBranch,
};
use dioxus::prelude::*;

use crate::components::{ErrorAlert, SkeletonRows};

/// Profiles table with search, sorting and paging over the fetched list
#[component]
pub fn OctoProfiles() -> Element {
    let mut table = use_signal(ProfileTable::new);

    // Single fetch on mount; the list is dropped with the page.
    use_future(move || async move {
        table.write().begin_fetch();
        let result = fetch_profiles().await.map_err(|e| e.to_string());
        table.write().finish_fetch(result);
    });

    let state = table.read();
    let branch = state.branch();
    let (rows, page_label, has_previous, has_next) = {
        let view = state.view();
        let rows: Vec<ProfileRow> = view.rows.iter().map(|p| ProfileRow::from(*p)).collect();
        (rows, view.page_label(), view.has_previous, view.has_next)
    };
    let search = state.search().to_string();
    let page_size = state.page_size();
    let title_sort = state.sort_direction_for(SortField::Title);
    let status_sort = state.sort_direction_for(SortField::Status);
    let description_sort = state.sort_direction_for(SortField::Description);
    let created_sort = state.sort_direction_for(SortField::CreatedAt);
    drop(state);

    let handle_sort = move |field: SortField| table.write().toggle_sort(field);

    rsx! {
        section {
            class: "m-4 rounded-lg border border-gray-200 bg-white shadow-sm",
            header {
                class: "flex flex-col gap-2 border-b border-gray-100 px-6 py-4",
                h1 { class: "text-xl font-semibold text-gray-900", "\u{1F9E9} Octo Browser Profiles" }
                div {
                    class: "flex gap-2",
                    input {
                        class: "w-full max-w-sm rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-gray-400",
                        r#type: "search",
                        placeholder: "Search by title or status...",
                        value: "{search}",
                        oninput: move |e| table.write().set_search(e.value()),
                    }
                    select {
                        class: "w-24 rounded-md border border-gray-300 px-2 py-2 text-sm",
                        value: "{page_size}",
                        onchange: move |e| {
                            match e.value().parse::<PageSize>() {
                                Ok(size) => table.write().set_page_size(size),
                                Err(err) => tracing::warn!(error = %err, "Ignoring page size"),
                            }
                        },
                        for size in PageSize::variants() {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: *size == page_size,
                                "{size}"
                            }
                        }
                    }
                }
            }
            div {
                class: "px-6 py-4",
                match branch {
                    TableBranch::Loading => rsx! {
                        SkeletonRows {}
                    },
                    TableBranch::Error(message) => rsx! {
                        ErrorAlert { title: "Error", message }
                    },
                    TableBranch::Empty => rsx! {},
                    TableBranch::Rows => rsx! {
                        table {
                            class: "w-full text-left text-sm",
                            thead {
                                class: "border-b border-gray-200 text-gray-500",
                                tr {
                                    SortHeader { label: "Title", field: SortField::Title, direction: title_sort, on_sort: handle_sort }
                                    SortHeader { label: "Status", field: SortField::Status, direction: status_sort, on_sort: handle_sort }
                                    SortHeader { label: "Description", field: SortField::Description, direction: description_sort, on_sort: handle_sort }
                                    th { class: "px-2 py-2 font-medium", "Proxy" }
                                    SortHeader { label: "Created", field: SortField::CreatedAt, direction: created_sort, on_sort: handle_sort }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-100",
                                for row in rows {
                                    tr {
                                        key: "{row.id}",
                                        class: "hover:bg-gray-50",
                                        td { class: "px-2 py-2 font-medium text-gray-900", "{row.title}" }
                                        td { class: "px-2 py-2", "{row.status}" }
                                        td { class: "px-2 py-2 text-gray-600", "{row.description}" }
                                        td { class: "px-2 py-2 font-mono text-xs", "{row.proxy}" }
                                        td { class: "px-2 py-2 whitespace-nowrap", "{row.created_at}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "mt-4 flex items-center justify-between",
                            button {
                                class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50 disabled:opacity-50",
                                disabled: !has_previous,
                                onclick: move |_| table.write().previous_page(),
                                "Previous"
                            }
                            span { class: "text-sm text-gray-600", "{page_label}" }
                            button {
                                class: "rounded-md border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50 disabled:opacity-50",
                                disabled: !has_next,
                                onclick: move |_| table.write().next_page(),
                                "Next"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SortHeaderProps {
    label: &'static str,
    field: SortField,
    #[props(!optional)]
    direction: Option<SortDirection>,
    on_sort: EventHandler<SortField>,
}

#[component]
fn SortHeader(props: SortHeaderProps) -> Element {
    let arrow = props.direction.map(SortDirection::arrow).unwrap_or("");
    let field = props.field;
    let on_sort = props.on_sort;

    rsx! {
        th {
            class: "cursor-pointer select-none px-2 py-2 font-medium hover:text-gray-900",
            onclick: move |_| on_sort.call(field),
            "{props.label} {arrow}"
        }
    }
}

/// Fetch profiles through the gateway configured by `API_URL`
#[server]
async fn fetch_profiles() -> Result<Vec<Profile>, ServerFnError> {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5001".to_string());
    let client = octo_client::GatewayClient::new(url);

    client
        .fetch_profiles()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
