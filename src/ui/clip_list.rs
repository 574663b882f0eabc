use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::Theme;
use super::rows::{COPIED_LABEL, RowView};
use crate::models::clip::truncate_to_width;

/// Leading drag handle shown on every row
const DRAG_HANDLE: &str = "≡ ";

/// Widest copy button text, so the button does not shift when it flips
const COPY_BUTTON_WIDTH: u16 = COPIED_LABEL.len() as u16 + 2;
const DELETE_BUTTON_WIDTH: u16 = 8;
/// Copy button, gap, delete button, right margin
const BUTTONS_WIDTH: u16 = COPY_BUTTON_WIDTH + 1 + DELETE_BUTTON_WIDTH + 1;

/// Rendering parameters that aren't part of the rows themselves
pub struct ClipListRenderContext<'a> {
    pub selected: usize,
    pub scroll_offset: usize,
    pub theme: &'a Theme,
}

/// Screen areas of one rendered row, used to route mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHitbox {
    pub index: usize,
    pub row: Rect,
    pub copy: Rect,
    pub delete: Rect,
}

/// What a mouse position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Row(usize),
    Copy(usize),
    Delete(usize),
}

impl HitTarget {
    /// Row the target belongs to
    pub fn index(self) -> usize {
        match self {
            HitTarget::Row(i) | HitTarget::Copy(i) | HitTarget::Delete(i) => i,
        }
    }
}

/// Resolve a terminal cell to the row element under it
pub fn locate(hitboxes: &[RowHitbox], column: u16, row: u16) -> Option<HitTarget> {
    let position = Position::new(column, row);
    hitboxes.iter().find_map(|hitbox| {
        if hitbox.copy.contains(position) {
            Some(HitTarget::Copy(hitbox.index))
        } else if hitbox.delete.contains(position) {
            Some(HitTarget::Delete(hitbox.index))
        } else if hitbox.row.contains(position) {
            Some(HitTarget::Row(hitbox.index))
        } else {
            None
        }
    })
}

/// Number of rows the list area can show below its header
pub fn visible_row_capacity(area: Rect) -> usize {
    area.height.saturating_sub(1) as usize
}

/// Draw the whole clip list from scratch.
///
/// Returns the hitboxes of the rows that ended up on screen; the previous
/// frame's hitboxes must be discarded.
pub fn render_clip_list(
    frame: &mut Frame,
    area: Rect,
    rows: &[RowView],
    ctx: ClipListRenderContext,
) -> Vec<RowHitbox> {
    let theme = ctx.theme;

    let header = Line::from(vec![
        Span::styled(" Clips", theme.clip_list_header),
        Span::styled(format!(" ({})", rows.len()), theme.clip_list_item_count),
    ]);
    frame.render_widget(Paragraph::new(header), Rect { height: area.height.min(1), ..area });

    let list_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };

    if rows.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "   No clips yet. Press a to add one.",
            theme.empty_hint,
        )));
        frame.render_widget(hint, list_area);
        return Vec::new();
    }

    let show_buttons = list_area.width > BUTTONS_WIDTH;
    let text_width = if show_buttons {
        list_area.width - BUTTONS_WIDTH
    } else {
        list_area.width
    };

    rows.iter()
        .skip(ctx.scroll_offset)
        .take(list_area.height as usize)
        .enumerate()
        .map(|(line, row)| {
            let y = list_area.y + line as u16;
            let row_rect = Rect::new(list_area.x, y, list_area.width, 1);
            let is_selected = row.index == ctx.selected;

            let mut row_style = Style::default();
            if is_selected {
                row_style = row_style.bg(theme.selection_bg);
            }
            if row.dragging {
                row_style = row_style.patch(theme.dragging);
            }
            if row.drag_over {
                row_style = row_style.patch(theme.drag_over);
            }

            // Background for the full row, including the button area
            frame.render_widget(Paragraph::new("").style(row_style), row_rect);

            let text_line = row_text(row, is_selected, text_width as usize, theme);
            frame.render_widget(
                Paragraph::new(text_line).style(row_style),
                Rect::new(list_area.x, y, text_width, 1),
            );

            let (copy, delete) = if show_buttons {
                let copy = Rect::new(list_area.x + text_width, y, COPY_BUTTON_WIDTH, 1);
                let delete = Rect::new(copy.right() + 1, y, DELETE_BUTTON_WIDTH, 1);

                let copy_style = if row.copy_label == COPIED_LABEL {
                    theme.copied_button
                } else {
                    theme.copy_button
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(format!("[{}]", row.copy_label), copy_style))
                        .style(row_style),
                    copy,
                );
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!("[{}]", row.delete_label),
                        theme.delete_button,
                    ))
                    .style(row_style),
                    delete,
                );
                (copy, delete)
            } else {
                (Rect::new(0, 0, 0, 0), Rect::new(0, 0, 0, 0))
            };

            RowHitbox {
                index: row.index,
                row: row_rect,
                copy,
                delete,
            }
        })
        .collect()
}

/// Handle, number, optional alias and the value preview, cut to `width`
fn row_text<'a>(row: &RowView, is_selected: bool, width: usize, theme: &Theme) -> Line<'a> {
    let number = format!("{:>3} ", row.index);
    let mut used = DRAG_HANDLE.width() + number.width();
    let mut spans = vec![
        Span::styled(DRAG_HANDLE, theme.drag_handle),
        Span::styled(number, theme.clip_number),
    ];

    if let Some(alias) = &row.alias {
        let label = format!("{} ", alias);
        used += label.width();
        spans.push(Span::styled(label, theme.clip_alias));
    }

    let value_style = if is_selected {
        theme.clip_text_selected
    } else {
        theme.clip_text
    };
    let room = width.saturating_sub(used + 1);
    let first_line = row.value.lines().next().unwrap_or("");
    let preview = if first_line.width() > room || row.value.lines().nth(1).is_some() {
        format!("{}...", truncate_to_width(first_line, room.saturating_sub(3)))
    } else {
        first_line.to_string()
    };
    spans.push(Span::styled(preview, value_style));

    Line::from(spans)
}
