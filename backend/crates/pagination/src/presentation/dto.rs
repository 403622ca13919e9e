//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::window_view::{WindowViewInput, WindowViewOutput};

/// Query for GET /api/pagination/window
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowQuery {
    pub current_page: i64,
    pub total_items: u64,
    #[serde(default)]
    pub items_per_page: Option<u64>,
    #[serde(default)]
    pub max_pages_to_show: Option<u64>,
}

impl From<WindowQuery> for WindowViewInput {
    fn from(query: WindowQuery) -> Self {
        Self {
            current_page: query.current_page,
            total_items: query.total_items,
            items_per_page: query.items_per_page,
            max_pages_to_show: query.max_pages_to_show,
        }
    }
}

/// Response for GET /api/pagination/window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub total_pages: u64,
    pub page_numbers: Vec<u64>,
    pub should_render: bool,
    pub controls: ControlsResponse,
    pub offset: OffsetResponse,
}

/// Target page per control, `null` when disabled
#[derive(Debug, Clone, Serialize)]
pub struct ControlsResponse {
    pub first: Option<u64>,
    pub previous: Option<u64>,
    pub next: Option<u64>,
    pub last: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OffsetResponse {
    pub skip: u64,
    pub limit: u64,
}

impl From<WindowViewOutput> for WindowResponse {
    fn from(output: WindowViewOutput) -> Self {
        let should_render = output.window.should_render();
        Self {
            total_pages: output.window.total_pages,
            page_numbers: output.window.page_numbers,
            should_render,
            controls: ControlsResponse {
                first: output.controls.first,
                previous: output.controls.previous,
                next: output.controls.next,
                last: output.controls.last,
            },
            offset: OffsetResponse {
                skip: output.query.skip(),
                limit: output.query.limit(),
            },
        }
    }
}
