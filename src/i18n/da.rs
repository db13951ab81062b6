use super::table::*;

pub static DA: Translations = Translations {
    nav: Nav {
        dashboard: "Dashboard",
        robot_builder: "Robotbygger",
        learn: "Lær",
        support: "Support",
        blog: "Blog",
        login: "Log ind",
        signup: "Opret konto",
        logout: "Log ud",
    },
    common: Common {
        brand: "RobotTrader",
        loading: "Indlæser...",
        back: "Tilbage",
        language_da: "DA",
        language_en: "EN",
    },
    landing: Landing {
        hero_title: "Byg din egen handelsrobot uden at skrive kode",
        hero_subtitle: "Omsæt dine trading-idéer til klare regler og generér en færdig Expert Advisor til MetaTrader 4 eller 5.",
        cta_start: "Kom i gang",
        cta_learn: "Lær det grundlæggende",
        how_it_works: "Sådan virker det",
        step1_title: "Beskriv din strategi",
        step1_desc: "Svar på enkle spørgsmål om hvornår du vil åbne og lukke handler.",
        step2_title: "Sæt dine risikoregler",
        step2_desc: "Vælg positionsstørrelse, stop loss og take profit.",
        step3_title: "Download koden",
        step3_desc: "Få MQL-kode du kan installere direkte i MetaTrader.",
        what_you_learn: "Hvad du lærer",
        learn1: "Hvordan handelsrobotter virker",
        learn2: "Hvordan en idé bliver til regler",
        learn3: "Hvordan du styrer din risiko",
        learn4: "Hvordan du tester sikkert på en demokonto",
        who_is_for: "Hvem er det for?",
        for_traders: "Tradere der vil automatisere deres strategi",
        for_beginners: "Begyndere der vil forstå robotter",
        for_curious: "Alle der er nysgerrige på algoritmisk trading",
        disclaimer: "Vigtig ansvarsfraskrivelse",
        disclaimer_text: "Trading indebærer betydelig risiko. RobotTrader er et undervisningsværktøj og giver ikke finansiel rådgivning. Test altid på en demokonto først.",
    },
    auth: Auth {
        login_title: "Log ind på din konto",
        signup_title: "Opret din konto",
        email: "E-mail",
        email_placeholder: "dig@eksempel.dk",
        password: "Adgangskode",
        password_placeholder: "••••••••",
        password_hint: "Mindst 6 tegn",
        confirm_password: "Bekræft adgangskode",
        login_button: "Log ind",
        signup_button: "Opret konto",
        no_account: "Har du ikke en konto?",
        has_account: "Har du allerede en konto?",
    },
    errors: Errors {
        fill_all_fields: "Udfyld venligst alle felter",
        invalid_email: "Indtast venligst en gyldig e-mailadresse",
        password_too_short: "Adgangskoden skal være mindst 6 tegn",
        passwords_mismatch: "Adgangskoderne er ikke ens",
        invalid_credentials: "Forkert e-mail eller adgangskode",
        email_unconfirmed: "Bekræft venligst din e-mailadresse før du logger ind",
        already_registered: "Der findes allerede en konto med denne e-mail",
        confirmation_pending: "Kontoen er oprettet. Tjek din e-mail og bekræft adressen, før du logger ind",
        invalid_form: "Udfyld venligst alle felter korrekt",
        generic: "Noget gik galt. Prøv igen.",
    },
    dashboard: Dashboard {
        welcome: "Velkommen tilbage",
        start_new_robot: "Start en ny robot",
        go_to_learn: "Gå til lektioner",
        go_to_support: "Få hjælp",
        recent_robots: "Dine robotter",
        no_robots: "Du har ikke oprettet nogen robotter endnu",
        create_first: "Opret din første robot",
        delete_robot: "Slet",
        deleted: "Robotten er slettet",
        delete_failed: "Robotten kunne ikke slettes. Prøv igen.",
        load_failed: "Dine robotter kunne ikke hentes. Prøv igen.",
        strategy_trend_following: "Trend-følgende",
        strategy_breakout: "Breakout",
        strategy_range: "Range trading",
        strategy_custom: "Tilpasset",
    },
    builder: Builder {
        title: "Robotbygger",
        subtitle: "Giv din robot et navn og vælg platform og strategi.",
        name: "Robotnavn",
        name_placeholder: "Min trend-robot",
        platform: "Platform",
        strategy: "Strategi",
        create: "Opret robot",
        created: "Robotten er oprettet",
        create_failed: "Robotten kunne ikke oprettes. Prøv igen.",
    },
    learn: Learn {
        title: "Lær",
        subtitle: "Korte lektioner der fører dig fra det grundlæggende til din første robot.",
        level: "Niveau",
        level1: "Grundlæggende",
        level2: "Strategi",
        level3: "Risiko",
        related_step: "Relateret trin i robotbyggeren",
        read_lesson: "Læs lektion",
        back_to_lessons: "Tilbage til lektioner",
        previous_lesson: "Forrige lektion",
        next_lesson: "Næste lektion",
        start_builder: "Start robotbyggeren",
        basics1_title: "Hvad er en handelsrobot?",
        basics1_desc: "En introduktion til Expert Advisors og automatiseret trading.",
        basics2_title: "MT4 vs MT5 - Hvad skal jeg vælge?",
        basics2_desc: "Forskellene mellem de to MetaTrader-platforme.",
        basics3_title: "Installer en robot i MT4",
        basics3_desc: "Trin for trin fra downloadet fil til kørende robot.",
        strategy1_title: "Din første strategi",
        strategy1_desc: "Omsæt en trading-idé til klare regler for ind- og udgang.",
        strategy2_title: "Indikatorer forklaret",
        strategy2_desc: "Glidende gennemsnit, RSI og andre almindelige byggesten.",
        strategy3_title: "Grundlæggende backtesting",
        strategy3_desc: "Test dine regler på historiske data før du går live.",
        risk1_title: "Grundlæggende risikostyring",
        risk1_desc: "Stop loss, take profit og hvorfor de er vigtige.",
        risk2_title: "Almindelige fejl",
        risk2_desc: "De faldgruber de fleste nye robot-tradere løber ind i.",
        risk3_title: "Positionsstørrelse",
        risk3_desc: "Hvor meget du skal risikere på hver handel.",
    },
    blog: Blog {
        title: "Blog",
        subtitle: "Artikler om automatiseret trading, risiko og robotter.",
        category_basics: "Grundlæggende",
        category_risk: "Risiko",
        category_trends: "Tendenser",
        category_tips: "Tips",
        read_more: "Læs mere",
        back_to_blog: "Tilbage til bloggen",
        algorithmic_trading_title: "Hvad er algoritmisk trading?",
        algorithmic_trading_excerpt: "Hvordan computere udfører handler ud fra foruddefinerede regler.",
        robot_risks_title: "Risiciene ved robot-trading",
        robot_risks_excerpt: "Hvorfor automatisering ikke fjerner markedsrisikoen.",
        automation_benefits_title: "Fordelene ved automatiseret trading",
        automation_benefits_excerpt: "Disciplin, hastighed og konsistens uden følelser.",
        common_mistakes_title: "Almindelige fejl i robot-trading",
        common_mistakes_excerpt: "Overoptimering, manglende stop loss og andre fælder.",
        future_title: "Fremtiden for handelsrobotter",
        future_excerpt: "Hvor automatiseret trading er på vej hen.",
        demo_testing_title: "Derfor bør du altid teste på en demokonto",
        demo_testing_excerpt: "Øv dig med virtuelle penge før du risikerer dine egne.",
    },
    support: Support {
        title: "Support",
        subtitle: "Hvordan kan vi hjælpe dig?",
        faq_title: "Ofte stillede spørgsmål",
        contact_title: "Kontakt os",
        name: "Navn",
        email: "E-mail",
        subject: "Emne",
        category: "Kategori",
        message: "Besked",
        send: "Send besked",
        message_sent: "Din besked er sendt. Vi vender tilbage hurtigst muligt.",
        send_failed: "Kunne ikke sende besked. Prøv igen.",
        category_question: "Spørgsmål",
        category_bug: "Fejlrapport",
        category_feedback: "Feedback",
        category_other: "Andet",
        faq_q1: "Skal jeg kunne programmere?",
        faq_a1: "Nej. Du beskriver din strategi med enkle valg, og vi genererer koden for dig.",
        faq_q2: "Hvilke platforme understøttes?",
        faq_a2: "Robotter kan genereres til MetaTrader 4 og MetaTrader 5.",
        faq_q3: "Er robotten garanteret at tjene penge?",
        faq_a3: "Nej. Ingen robot kan garantere profit. Test altid på en demokonto først.",
        faq_q4: "Kan jeg redigere min robot senere?",
        faq_a4: "Ja. Dine robotter gemmes på dit dashboard.",
        faq_q5: "Er dette finansiel rådgivning?",
        faq_a5: "Nej. RobotTrader er udelukkende et undervisningsværktøj.",
    },
    footer: Footer {
        disclaimer: "Kun til uddannelsesmæssige formål. Ikke finansiel rådgivning.",
        links_title: "Ressourcer",
    },
    not_found: NotFound {
        title: "404",
        message: "Siden blev ikke fundet",
        return_home: "Tilbage til forsiden",
    },
};
