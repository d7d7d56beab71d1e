//! Fixed listings and accounts the board starts with.

use chrono::NaiveDate;

use crate::models::{resume::Resume, user::User, vacancy::Vacancy};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar days")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "user1".into(),
            email: "user@example.com".into(),
            name: "Иван Петров".into(),
            is_employer: false,
        },
        User {
            id: 2,
            username: "employer1".into(),
            email: "employer@example.com".into(),
            name: "ООО \"Технологии\"".into(),
            is_employer: true,
        },
    ]
}

pub fn vacancies() -> Vec<Vacancy> {
    vec![
        Vacancy {
            id: 1,
            title: "Frontend-разработчик".into(),
            company: "ООО \"Технологии\"".into(),
            location: "Москва".into(),
            salary: "120 000 - 180 000 ₽".into(),
            description: "Требуется опытный Frontend-разработчик для создания современных веб-приложений. Работа в дружном коллективе, современный офис, гибкий график.".into(),
            requirements: strings(&[
                "Знание JavaScript, React, TypeScript",
                "Опыт работы от 2 лет",
                "Понимание принципов адаптивной верстки",
                "Опыт работы с REST API",
            ]),
            employer_id: 2,
            created_at: day(2025, 3, 15),
            category: "IT, интернет, связь".into(),
            work_type: "Полная занятость".into(),
        },
        Vacancy {
            id: 2,
            title: "Java-разработчик".into(),
            company: "АО \"Финтех\"".into(),
            location: "Санкт-Петербург".into(),
            salary: "150 000 - 200 000 ₽".into(),
            description: "Разработка высоконагруженных банковских систем на Java. Требуется опыт работы с микросервисной архитектурой и знание Spring Framework.".into(),
            requirements: strings(&[
                "Java 11+, Spring Boot, Spring Data",
                "Опыт работы с микросервисами",
                "Понимание принципов SOLID, DDD",
                "Навыки работы с PostgreSQL",
            ]),
            employer_id: 3,
            created_at: day(2025, 3, 12),
            category: "IT, интернет, связь".into(),
            work_type: "Полная занятость".into(),
        },
        Vacancy {
            id: 3,
            title: "Менеджер по продажам".into(),
            company: "ООО \"ТоргСервис\"".into(),
            location: "Москва".into(),
            salary: "80 000 - 120 000 ₽".into(),
            description: "Поиск и привлечение клиентов, ведение переговоров, заключение договоров. Работа в офисе с возможностью удаленной работы 2 дня в неделю.".into(),
            requirements: strings(&[
                "Опыт работы в продажах от 1 года",
                "Навыки ведения переговоров",
                "Желание развиваться в сфере продаж",
                "Коммуникабельность и стрессоустойчивость",
            ]),
            employer_id: 4,
            created_at: day(2025, 3, 10),
            category: "Продажи".into(),
            work_type: "Полная занятость".into(),
        },
        Vacancy {
            id: 4,
            title: "Бухгалтер".into(),
            company: "ЗАО \"Консалтинг Групп\"".into(),
            location: "Екатеринбург".into(),
            salary: "70 000 - 90 000 ₽".into(),
            description: "Ведение бухгалтерского и налогового учета, подготовка и сдача отчетности, работа с первичной документацией.".into(),
            requirements: strings(&[
                "Высшее экономическое образование",
                "Опыт работы бухгалтером от 3 лет",
                "Знание 1С: Бухгалтерия 8.3",
                "Знание налогового законодательства РФ",
            ]),
            employer_id: 5,
            created_at: day(2025, 3, 8),
            category: "Бухгалтерия, финансы".into(),
            work_type: "Полная занятость".into(),
        },
        Vacancy {
            id: 5,
            title: "DevOps-инженер".into(),
            company: "ООО \"Технологии\"".into(),
            location: "Москва, удаленно".into(),
            salary: "180 000 - 240 000 ₽".into(),
            description: "Настройка и поддержка CI/CD, автоматизация процессов, мониторинг инфраструктуры. Возможна полностью удаленная работа.".into(),
            requirements: strings(&[
                "Опыт работы с Kubernetes, Docker",
                "Знание Linux на уровне администрирования",
                "Опыт работы с CI/CD (GitLab CI, Jenkins)",
                "Понимание принципов IaC",
            ]),
            employer_id: 2,
            created_at: day(2025, 3, 5),
            category: "IT, интернет, связь".into(),
            work_type: "Удаленная работа".into(),
        },
    ]
}

pub fn resumes() -> Vec<Resume> {
    vec![
        Resume {
            id: 1,
            user_id: 1,
            full_name: "Иван Петров".into(),
            title: "Frontend-разработчик".into(),
            location: "Москва".into(),
            experience: "3 года".into(),
            skills: strings(&["JavaScript", "React", "TypeScript", "HTML", "CSS", "Git"]),
            education: "Московский Государственный Университет, Факультет Вычислительной Математики и Кибернетики, 2022".into(),
            about: "Ответственный разработчик с опытом создания современных веб-приложений. Владею хорошими навыками командной работы, умею работать с дедлайнами.".into(),
            salary: "от 150 000 ₽".into(),
            contact: "ivan.petrov@example.com".into(),
            created_at: day(2025, 3, 10),
        },
        Resume {
            id: 2,
            user_id: 6,
            full_name: "Анна Сидорова".into(),
            title: "UI/UX Дизайнер".into(),
            location: "Санкт-Петербург".into(),
            experience: "4 года".into(),
            skills: strings(&["Figma", "Adobe Photoshop", "Adobe Illustrator", "Sketch", "Prototyping"]),
            education: "Санкт-Петербургский Государственный Университет, Факультет Искусств, 2020".into(),
            about: "Креативный дизайнер с портфолио успешных проектов. Создаю удобные и эстетичные интерфейсы, ориентированные на пользователей.".into(),
            salary: "от 120 000 ₽".into(),
            contact: "anna.sidorova@example.com".into(),
            created_at: day(2025, 3, 8),
        },
        Resume {
            id: 3,
            user_id: 7,
            full_name: "Алексей Смирнов".into(),
            title: "Java-разработчик".into(),
            location: "Москва".into(),
            experience: "5 лет".into(),
            skills: strings(&["Java", "Spring Boot", "Hibernate", "PostgreSQL", "Docker", "Microservices"]),
            education: "МГТУ им. Баумана, Факультет Информатики и Систем Управления, 2019".into(),
            about: "Опытный Java-разработчик с глубоким пониманием многопоточности, архитектуры приложений и высоконагруженных систем.".into(),
            salary: "от 200 000 ₽".into(),
            contact: "alexei.smirnov@example.com".into(),
            created_at: day(2025, 3, 5),
        },
        Resume {
            id: 4,
            user_id: 8,
            full_name: "Екатерина Иванова".into(),
            title: "Менеджер по продажам".into(),
            location: "Екатеринбург".into(),
            experience: "3 года".into(),
            skills: strings(&["Ведение переговоров", "CRM-системы", "B2B продажи", "Подготовка коммерческих предложений"]),
            education: "Уральский Федеральный Университет, Экономический факультет, 2021".into(),
            about: "Целеустремленный менеджер по продажам с успешным опытом привлечения и удержания клиентов. Умею находить индивидуальный подход к каждому клиенту.".into(),
            salary: "от 80 000 ₽".into(),
            contact: "ekaterina.ivanova@example.com".into(),
            created_at: day(2025, 3, 1),
        },
        Resume {
            id: 5,
            user_id: 9,
            full_name: "Михаил Козлов".into(),
            title: "DevOps-инженер".into(),
            location: "Удаленно".into(),
            experience: "4 года".into(),
            skills: strings(&["Kubernetes", "Docker", "Terraform", "AWS", "CI/CD", "Ansible", "Prometheus"]),
            education: "Новосибирский Государственный Технический Университет, 2020".into(),
            about: "DevOps-инженер с опытом автоматизации инфраструктуры и процессов разработки. Обеспечиваю стабильную работу и масштабирование систем.".into(),
            salary: "от 180 000 ₽".into(),
            contact: "mikhail.kozlov@example.com".into(),
            created_at: day(2025, 2, 25),
        },
    ]
}
