//! Skill levels behind the progress bars on the main page.

pub struct Skill {
    pub name: &'static str,
    pub percent: u16,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML5",
        percent: 90,
    },
    Skill {
        name: "CSS3",
        percent: 85,
    },
    Skill {
        name: "JavaScript",
        percent: 70,
    },
    Skill {
        name: "Bootstrap",
        percent: 75,
    },
    Skill {
        name: "Адаптивная верстка",
        percent: 80,
    },
];
