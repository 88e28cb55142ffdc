use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Carousel a book is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shelf {
    Diy,
    HealthAndWellbeing,
    FinanceAndAi,
}

impl Shelf {
    pub const ALL: [Shelf; 3] = [Self::Diy, Self::HealthAndWellbeing, Self::FinanceAndAi];

    /// Category label shown under each cover.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Diy => "DIY",
            Self::HealthAndWellbeing => "Salud y Bienestar",
            Self::FinanceAndAi => "Finanzas e IA",
        }
    }

    /// Fragment used in the shelf section id.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Diy => "diy",
            Self::HealthAndWellbeing => "salud-bienestar",
            Self::FinanceAndAi => "finanzas-ia",
        }
    }
}

/// A digital book for sale. Prices are in EUR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: &'static str,
    pub title: &'static str,
    pub shelf: Shelf,
    pub cover_url: &'static str,
    pub mock_url: &'static str,
    pub summary: &'static str,
    pub original_price: Decimal,
    pub discounted_price: Decimal,
    /// Product code at the checkout provider.
    pub checkout_id: &'static str,
}

pub const BOOKS: &[Book] = &[
    Book {
        id: "14-proyectos-diy",
        title: "14 proyectos DIY para transformar tu hogar en un fin de semana",
        shelf: Shelf::Diy,
        cover_url: "https://i.ibb.co/Lh69XSpt/14-proyectos-DIY-para-transformar-tu-hogar-en-un-fin-de-semana.jpg",
        mock_url: "https://i.ibb.co/DHMf47jK/14-Proyectos-DIY.png",
        summary: "Crea, decora y disfruta: 14 ideas paso a paso para renovar cualquier rincón sin obra ni gastos locos.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "R102956683Y",
    },
    Book {
        id: "auto-desempeno",
        title: "Auto Desempeño Masculino",
        shelf: Shelf::HealthAndWellbeing,
        cover_url: "https://i.ibb.co/nsGjx7Ss/Auto-Desempe-o-Masculino.jpg",
        mock_url: "https://i.ibb.co/hRVQ8Jn6/Auto-Desempe-o-Masculino.png",
        summary: "El enfoque real para durar más, disfrutar más y conectar de verdad.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "G102945033G",
    },
    Book {
        id: "diy-upcycling",
        title: "DIY Upcycling 5 proyectos creativos para transformar tu hogar",
        shelf: Shelf::Diy,
        cover_url: "https://i.ibb.co/Kp5GtRJz/DIY-Upcycling-5-proyectos-creativos-para-transformar-tu-hogar.jpg",
        mock_url: "https://i.ibb.co/1Y68N20F/DIY-Upcycling-5-proyectos-creativos-para-transformar-tu-hogar.png",
        summary: "Transforma tu hogar con 5 proyectos creativos usando materiales reciclados.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "W102956911G",
    },
    Book {
        id: "estrategias-digitales",
        title: "Estrategias Digitales para PYMES en 2026",
        shelf: Shelf::FinanceAndAi,
        cover_url: "https://i.ibb.co/DPZQvtKX/Estrategias-Digitales-para-PYMES-en-2026.jpg",
        mock_url: "https://i.ibb.co/h1XmWPrS/Estrategias-Digitales-para-PYMES-en-2026.png",
        summary: "Plan exprés para pasar del caos al crecimiento digital.",
        original_price: dec!(19.99),
        discounted_price: dec!(14.99),
        checkout_id: "H102956822M",
    },
    Book {
        id: "ia-para-todos",
        title: "IA Para Todos",
        shelf: Shelf::FinanceAndAi,
        cover_url: "https://i.ibb.co/XZjfgM3n/IA-Para-Todos.jpg",
        mock_url: "https://i.ibb.co/X1kMv7K/moc-ai-4.png",
        summary: "De 0 conocimientos a tus primeros ingresos con IA en 30 días.",
        original_price: dec!(19.99),
        discounted_price: dec!(14.99),
        checkout_id: "J102944384P",
    },
    Book {
        id: "madres-activas",
        title: "Madres Activas en Casa",
        shelf: Shelf::HealthAndWellbeing,
        cover_url: "https://i.ibb.co/KcVNTFn7/Madres-Activas-en-Casa.jpg",
        mock_url: "https://i.ibb.co/zVbn5wn3/Madres-Activas-en-Casa.png",
        summary: "Bienestar real para mamás con rutinas flexibles y minutos al día.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "S102968505K",
    },
    Book {
        id: "operacion-verano",
        title: "Operacion Verano Guía Completa 2026",
        shelf: Shelf::HealthAndWellbeing,
        cover_url: "https://i.ibb.co/d0YRz67G/Gu-a-Completa-2026.jpg",
        mock_url: "https://i.ibb.co/2Y89rZx5/Operaci-n-Verano.png",
        summary: "12 semanas para tu mejor verano sin pasar hambre ni cardio excesivo.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "O102968513I",
    },
    Book {
        id: "velas-soja",
        title: "Velas de Soja Desde Cero",
        shelf: Shelf::Diy,
        cover_url: "https://i.ibb.co/MDvYmwgK/Velas-de-Soja-desde-cero.jpg",
        mock_url: "https://i.ibb.co/8LCgzKfV/Velas-de-Soja.png",
        summary: "Crea velas naturales, regala luz y vende tu primer lote este mes.",
        original_price: dec!(12.99),
        discounted_price: dec!(9.99),
        checkout_id: "G102944748Y",
    },
];

/// Carousel order per shelf.
pub const SHELF_ORDER: &[(Shelf, &[&str])] = &[
    (
        Shelf::Diy,
        &["14-proyectos-diy", "diy-upcycling", "velas-soja"],
    ),
    (
        Shelf::HealthAndWellbeing,
        &["auto-desempeno", "madres-activas", "operacion-verano"],
    ),
    (
        Shelf::FinanceAndAi,
        &["ia-para-todos", "estrategias-digitales"],
    ),
];

/// Where a book sits in its shelf's carousel. Unlisted books go last.
pub fn shelf_position(book: &Book) -> usize {
    SHELF_ORDER
        .iter()
        .find(|(shelf, _)| *shelf == book.shelf)
        .and_then(|(_, ids)| ids.iter().position(|id| *id == book.id))
        .unwrap_or(usize::MAX)
}
