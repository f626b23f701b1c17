use vdt_config::layout::ElementLayout;
use vdt_lang_vietnamese::NguHanh;
use vdt_types::ElementGroups;

use crate::types::Sheet;

/// Element tag -> names, one row per element in Ngũ Hành order
pub fn extract_element_groups<S: Sheet>(sheet: &S, layout: &ElementLayout) -> ElementGroups {
    let mut groups = ElementGroups::new();

    for (offset, expected) in NguHanh::ALL.iter().enumerate() {
        let row = layout.first_row + offset as u32;
        let tag = sheet.cell(row, layout.tag_col);
        let names = sheet.cell(row, layout.names_col);
        if !tag.is_truthy() || !names.is_truthy() {
            continue;
        }

        let tag = tag.as_text();
        if NguHanh::from_str(&tag) != Some(*expected) {
            tracing::warn!(
                "{}: row {} holds {:?}, expected {} ({})",
                sheet.name(),
                row,
                tag,
                expected.as_str(),
                expected.english()
            );
        }
        groups.insert(tag, names.as_text());
    }

    tracing::info!("{}: {} Ngũ Hành groups", sheet.name(), groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_extract_element_groups() {
        let mut grid = Grid::new("DT");
        grid.set(6, 22, "MỘC").set(6, 23, " Bách, Tùng, Lâm ");
        grid.set(7, 22, "HỎA").set(7, 23, "Đăng, Huy");
        // no names: skipped
        grid.set(8, 22, "THỔ");
        grid.set(9, 22, "KIM").set(9, 23, "Ngân, Kim");
        grid.set(10, 22, "THỦY").set(10, 23, "Giang, Hà");
        // below the five element rows
        grid.set(11, 22, "KHÁC").set(11, 23, "x");

        let groups = extract_element_groups(&grid, &ElementLayout::default());

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["MỘC", "HỎA", "KIM", "THỦY"]);
        assert_eq!(groups.get("MỘC").map(String::as_str), Some("Bách, Tùng, Lâm"));
    }

    #[test]
    fn test_unexpected_tag_is_kept() {
        let mut grid = Grid::new("DT");
        grid.set(6, 22, "Kim").set(6, 23, "Ngân");

        let groups = extract_element_groups(&grid, &ElementLayout::default());
        assert_eq!(groups.get("Kim").map(String::as_str), Some("Ngân"));
    }
}
