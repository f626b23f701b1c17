use vdt_config::layout::DetailLayout;
use vdt_types::{CucDetail, CucDetails};

use crate::types::Sheet;

pub fn extract_details<S: Sheet>(sheet: &S, layout: &DetailLayout) -> CucDetails {
    let mut details = CucDetails::new();

    for row in layout.window.rows(sheet.height()) {
        // Title and section rows carry text in the number column
        let Some(number) = sheet.cell(row, layout.number_col).as_number() else {
            continue;
        };
        let text = |col: u32| sheet.cell(row, col).as_text();

        details.insert(
            number.to_string(),
            CucDetail {
                number,
                cuc_name: text(layout.cuc_name_col),
                alias: text(layout.alias_col),
                description: text(layout.description_col),
                family: text(layout.family_col),
                tinh_danh_dien: text(layout.tinh_danh_dien_col),
                health: text(layout.health_col),
                career: text(layout.career_col),
                tinh_danh_phan: text(layout.tinh_danh_phan_col),
                tinh_danh_bat: text(layout.tinh_danh_bat_col),
                phuc_duc: text(layout.phuc_duc_col),
            },
        );
    }

    tracing::info!("{}: {} Cục details", sheet.name(), details.len());
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::Cell;

    #[test]
    fn test_extract_details() {
        let mut grid = Grid::new("81 Cục Việt Danh");
        grid.row(3, 2, vec!["STT".into(), "Tên Cục".into()]);
        grid.row(
            4,
            2,
            vec![
                13.0.into(),
                "Kỳ Tài".into(),
                "Trí mưu".into(),
                "Tài năng xuất chúng".into(),
                "Gia đạo êm ấm".into(),
                "Cát".into(),
                "Khỏe".into(),
                "Học thuật".into(),
                Cell::Empty,
                "Bát".into(),
                "Phúc dày".into(),
            ],
        );
        grid.row(5, 2, vec![14.0.into()]);

        let details = extract_details(&grid, &DetailLayout::default());

        assert_eq!(details.keys().collect::<Vec<_>>(), vec!["13", "14"]);
        let kt = details.get("13").unwrap();
        assert_eq!(kt.cuc_name, "Kỳ Tài");
        assert_eq!(kt.tinh_danh_dien, "Cát");
        assert_eq!(kt.career, "Học thuật");
        assert_eq!(kt.tinh_danh_phan, "");
        assert_eq!(kt.phuc_duc, "Phúc dày");
        assert_eq!(details.get("14").map(|d| d.cuc_name.as_str()), Some(""));
    }
}
