//! Static project catalog shown in the portfolio section, with category
//! filtering for the gallery.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Html,
    Js,
    React,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Html => "HTML/CSS",
            ProjectCategory::Js => "JavaScript",
            ProjectCategory::React => "React",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "Все",
            ProjectFilter::Category(category) => category.label(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_link: &'static str,
    pub code_link: &'static str,
    pub category: ProjectCategory,
}

pub const CATALOG: &[Project] = &[
    Project {
        title: "Личный сайт",
        description: "Адаптивный веб-сайт с использованием HTML и CSS. Проект включает в себя \
                      главную страницу, портфолио и контактную форму.",
        technologies: &["HTML5", "CSS3"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::Html,
    },
    Project {
        title: "Todo-приложение",
        description: "Интерактивное приложение для управления задачами с возможностью \
                      добавления, редактирования и удаления задач.",
        technologies: &["JavaScript", "LocalStorage", "Bootstrap"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::Js,
    },
    Project {
        title: "Портфолио на Bootstrap",
        description: "Современное адаптивное портфолио с использованием Bootstrap 5. Включает \
                      анимации и интерактивные элементы.",
        technologies: &["Bootstrap 5", "JavaScript", "CSS3"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::Html,
    },
    Project {
        title: "Интернет-магазин",
        description: "Прототип интернет-магазина с корзиной покупок и системой фильтрации \
                      товаров.",
        technologies: &["React", "Node.js", "MongoDB"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::React,
    },
    Project {
        title: "Игра \"Память\"",
        description: "Карточная игра на запоминание на чистом JavaScript с системой подсчета \
                      очков и таймером.",
        technologies: &["JavaScript", "CSS3", "HTML5"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::Js,
    },
    Project {
        title: "Лендинг продукта",
        description: "Продающая страница для цифрового продукта с адаптивным дизайном и формой \
                      заказа.",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        live_link: "#",
        code_link: "#",
        category: ProjectCategory::Html,
    },
];

pub fn filtered(filter: ProjectFilter) -> Vec<&'static Project> {
    CATALOG
        .iter()
        .filter(|project| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_the_whole_catalog() {
        assert_eq!(filtered(ProjectFilter::All).len(), CATALOG.len());
    }

    #[test]
    fn category_filters_partition_the_catalog() {
        let html = filtered(ProjectFilter::Category(ProjectCategory::Html)).len();
        let js = filtered(ProjectFilter::Category(ProjectCategory::Js)).len();
        let react = filtered(ProjectFilter::Category(ProjectCategory::React)).len();
        assert_eq!(html + js + react, CATALOG.len());
        assert_eq!(react, 1);
    }

    #[test]
    fn category_filter_only_yields_matching_projects() {
        for project in filtered(ProjectFilter::Category(ProjectCategory::Js)) {
            assert_eq!(project.category, ProjectCategory::Js);
        }
    }
}
