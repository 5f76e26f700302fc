use crate::ui::app::{App, Demo, PickerDemo, SearchDemo};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{MUTED_TEXT, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title(), app.notice()).widget(), header);
    Footer::new(app.hints()).render(frame, footer);

    match app.demo() {
        Demo::Search(demo) => draw_search_demo(frame, body, demo),
        Demo::Picker(demo) => draw_picker_demo(frame, body, app.field_area(), demo),
    }
}

fn draw_search_demo(frame: &mut Frame<'_>, body: Rect, demo: &SearchDemo) {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Enter 또는 클릭으로 사원 검색을 엽니다.", muted)),
        Line::from(""),
    ];
    match demo.last_selected() {
        Some(employee) => {
            lines.push(Line::from(vec![
                Span::styled("  마지막 선택: ", muted),
                Span::styled(
                    employee.name.as_str(),
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", employee.meta_line()), muted),
            ]));
            if let Some(email) = &employee.email {
                lines.push(Line::from(Span::styled(format!("  {email}"), muted)));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "  아직 선택된 사원이 없습니다.",
            muted,
        ))),
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    demo.modal().render(frame);
}

fn draw_picker_demo(frame: &mut Frame<'_>, body: Rect, field: Rect, demo: &PickerDemo) {
    let muted = Style::default().fg(MUTED_TEXT);
    let picker = demo.picker();

    let label = Rect {
        y: field.y.saturating_sub(1),
        height: 1,
        ..field
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("담당자", Style::default().fg(TEXT)))),
        label,
    );
    picker.render_field(frame, field);

    let value = picker.value();
    let mode = if demo.is_controlled() {
        "controlled"
    } else {
        "uncontrolled"
    };
    let details = vec![
        Line::from(Span::styled(
            format!("value: {{ empNo: {:?}, name: {:?} }}", value.emp_no, value.name),
            muted,
        )),
        Line::from(Span::styled(
            format!(
                "mode: {mode}  showEmpNo: {}  disabled: {}",
                picker.options().show_emp_no,
                picker.options().disabled
            ),
            muted,
        )),
    ];
    let details_area = Rect {
        y: field.bottom().saturating_add(1),
        height: body.bottom().saturating_sub(field.bottom().saturating_add(1)),
        ..field
    };
    frame.render_widget(Paragraph::new(details), details_area);

    picker.render_dialog(frame);
}
