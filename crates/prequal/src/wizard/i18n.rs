use serde::{Deserialize, Serialize};

/// Language for every text-producing engine function. Passed explicitly per
/// call; the engine holds no locale state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const fn label(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

/// Keys into the message catalog. Scoring code never builds user-facing
/// strings inline; it names a key and the locale picks the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKey {
    CreditImprovementTitle,
    CreditImprovementBody,
    DownPaymentAssistanceTitle,
    DownPaymentAssistanceBody,
    SelfEmploymentHistoryTitle,
    SelfEmploymentHistoryBody,
    AlternativeDocumentationTitle,
    AlternativeDocumentationBody,
    ItinOptionsTitle,
    ItinOptionsBody,
    CreditEventRecoveryTitle,
    CreditEventRecoveryBody,
    CollectionsResolutionTitle,
    CollectionsResolutionBody,
    FirstTimeBuyerFactor,
    StableEmploymentFactor,
    GoodCreditFactor,
    DownPaymentReadyFactor,
}

/// Pure catalog lookup. The single templated message
/// (`CreditEventRecoveryBody`) carries a `{years}` placeholder the caller
/// fills in.
pub(crate) fn text(key: MessageKey, locale: Locale) -> &'static str {
    use MessageKey::*;

    match (key, locale) {
        (CreditImprovementTitle, Locale::En) => "Improve your credit standing",
        (CreditImprovementTitle, Locale::Es) => "Mejore su historial de crédito",
        (CreditImprovementBody, Locale::En) => {
            "Paying down balances and disputing reporting errors can lift your credit \
             category before you apply, which widens the loan programs available to you."
        }
        (CreditImprovementBody, Locale::Es) => {
            "Reducir saldos y disputar errores en su reporte puede subir su categoría de \
             crédito antes de solicitar, lo que amplía los programas de préstamo disponibles."
        }
        (DownPaymentAssistanceTitle, Locale::En) => "Explore down payment assistance",
        (DownPaymentAssistanceTitle, Locale::Es) => "Explore ayuda para el enganche",
        (DownPaymentAssistanceBody, Locale::En) => {
            "State and local programs can cover part or all of a down payment for \
             qualifying buyers; ask your broker which programs apply in your area."
        }
        (DownPaymentAssistanceBody, Locale::Es) => {
            "Programas estatales y locales pueden cubrir parte o todo el enganche para \
             compradores que califican; pregunte a su agente cuáles aplican en su zona."
        }
        (SelfEmploymentHistoryTitle, Locale::En) => "Build self-employment history",
        (SelfEmploymentHistoryTitle, Locale::Es) => "Acumule historial de trabajo independiente",
        (SelfEmploymentHistoryBody, Locale::En) => {
            "Most lenders want two full years of self-employment income on record; keep \
             clean books and file both tax years to document it."
        }
        (SelfEmploymentHistoryBody, Locale::Es) => {
            "La mayoría de los prestamistas piden dos años completos de ingresos como \
             independiente; mantenga su contabilidad al día y declare ambos años fiscales."
        }
        (AlternativeDocumentationTitle, Locale::En) => "Alternative documentation options",
        (AlternativeDocumentationTitle, Locale::Es) => "Opciones de documentación alternativa",
        (AlternativeDocumentationBody, Locale::En) => {
            "Without an SSN or ITIN, conventional financing is unavailable, but a broker \
             can review alternative-documentation paths once identification is in place."
        }
        (AlternativeDocumentationBody, Locale::Es) => {
            "Sin SSN ni ITIN el financiamiento convencional no está disponible, pero un \
             agente puede revisar rutas de documentación alternativa cuando tenga una \
             identificación vigente."
        }
        (ItinOptionsTitle, Locale::En) => "ITIN mortgage options",
        (ItinOptionsTitle, Locale::Es) => "Opciones de hipoteca con ITIN",
        (ItinOptionsBody, Locale::En) => {
            "Several lenders offer ITIN mortgage programs; expect a larger down payment \
             and slightly higher rates than SSN-based loans."
        }
        (ItinOptionsBody, Locale::Es) => {
            "Varios prestamistas ofrecen programas de hipoteca con ITIN; espere un \
             enganche mayor y tasas algo más altas que los préstamos con SSN."
        }
        (CreditEventRecoveryTitle, Locale::En) => "Wait out the credit event window",
        (CreditEventRecoveryTitle, Locale::Es) => "Espere el plazo del evento de crédito",
        (CreditEventRecoveryBody, Locale::En) => {
            "Lenders generally want about four years after a bankruptcy or foreclosure; \
             roughly {years} more year(s) remain before most programs open up."
        }
        (CreditEventRecoveryBody, Locale::Es) => {
            "Los prestamistas suelen pedir unos cuatro años después de una bancarrota o \
             ejecución hipotecaria; faltan aproximadamente {years} año(s) para que la \
             mayoría de los programas estén disponibles."
        }
        (CollectionsResolutionTitle, Locale::En) => "Resolve outstanding collections",
        (CollectionsResolutionTitle, Locale::Es) => "Resuelva las cuentas en cobranza",
        (CollectionsResolutionBody, Locale::En) => {
            "Settling or paying down collection accounts above a few hundred dollars \
             removes a common underwriting objection before application."
        }
        (CollectionsResolutionBody, Locale::Es) => {
            "Liquidar o negociar cuentas en cobranza de varios cientos de dólares elimina \
             una objeción común de los analistas antes de la solicitud."
        }
        (FirstTimeBuyerFactor, Locale::En) => {
            "First-time buyer: eligible for dedicated first-time buyer programs."
        }
        (FirstTimeBuyerFactor, Locale::Es) => {
            "Comprador por primera vez: elegible para programas dedicados a primeros compradores."
        }
        (StableEmploymentFactor, Locale::En) => {
            "Stable W-2 employment makes income verification straightforward."
        }
        (StableEmploymentFactor, Locale::Es) => {
            "El empleo W-2 estable facilita la verificación de ingresos."
        }
        (GoodCreditFactor, Locale::En) => {
            "Good credit standing qualifies for competitive interest rates."
        }
        (GoodCreditFactor, Locale::Es) => {
            "Un buen historial de crédito califica para tasas de interés competitivas."
        }
        (DownPaymentReadyFactor, Locale::En) => {
            "Down payment already saved, which strengthens any application."
        }
        (DownPaymentReadyFactor, Locale::Es) => {
            "El enganche ya está ahorrado, lo que fortalece cualquier solicitud."
        }
    }
}
