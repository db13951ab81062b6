use super::table::*;

pub static EN: Translations = Translations {
    nav: Nav {
        dashboard: "Dashboard",
        robot_builder: "Robot Builder",
        learn: "Learn",
        support: "Support",
        blog: "Blog",
        login: "Log in",
        signup: "Sign up",
        logout: "Log out",
    },
    common: Common {
        brand: "RobotTrader",
        loading: "Loading...",
        back: "Back",
        language_da: "DA",
        language_en: "EN",
    },
    landing: Landing {
        hero_title: "Build your own trading robot without writing code",
        hero_subtitle: "Turn your trading ideas into clear rules and generate a ready-to-use Expert Advisor for MetaTrader 4 or 5.",
        cta_start: "Start building",
        cta_learn: "Learn the basics",
        how_it_works: "How it works",
        step1_title: "Describe your strategy",
        step1_desc: "Answer simple questions about when to enter and exit trades.",
        step2_title: "Set your risk rules",
        step2_desc: "Choose position size, stop loss and take profit.",
        step3_title: "Download the code",
        step3_desc: "Get MQL code you can install directly in MetaTrader.",
        what_you_learn: "What you will learn",
        learn1: "How trading robots work",
        learn2: "How to turn an idea into rules",
        learn3: "How to manage risk",
        learn4: "How to test safely on a demo account",
        who_is_for: "Who is it for?",
        for_traders: "Traders who want to automate their strategy",
        for_beginners: "Beginners who want to understand robots",
        for_curious: "Anyone curious about algorithmic trading",
        disclaimer: "Important disclaimer",
        disclaimer_text: "Trading involves significant risk. RobotTrader is an educational tool and does not provide financial advice. Always test on a demo account first.",
    },
    auth: Auth {
        login_title: "Log in to your account",
        signup_title: "Create your account",
        email: "Email",
        email_placeholder: "you@example.com",
        password: "Password",
        password_placeholder: "••••••••",
        password_hint: "At least 6 characters",
        confirm_password: "Confirm password",
        login_button: "Log in",
        signup_button: "Create account",
        no_account: "Don't have an account?",
        has_account: "Already have an account?",
    },
    errors: Errors {
        fill_all_fields: "Please fill in all fields",
        invalid_email: "Please enter a valid email address",
        password_too_short: "Password must be at least 6 characters",
        passwords_mismatch: "Passwords do not match",
        invalid_credentials: "Invalid email or password",
        email_unconfirmed: "Please confirm your email address before logging in",
        already_registered: "An account with this email already exists",
        confirmation_pending: "Account created. Check your email and confirm the address before logging in",
        invalid_form: "Please fill in all fields correctly",
        generic: "Something went wrong. Please try again.",
    },
    dashboard: Dashboard {
        welcome: "Welcome back",
        start_new_robot: "Start a new robot",
        go_to_learn: "Go to lessons",
        go_to_support: "Get help",
        recent_robots: "Your robots",
        no_robots: "You have not created any robots yet",
        create_first: "Create your first robot",
        delete_robot: "Delete",
        deleted: "Robot deleted",
        delete_failed: "Could not delete the robot. Please try again.",
        load_failed: "Could not load your robots. Please try again.",
        strategy_trend_following: "Trend following",
        strategy_breakout: "Breakout",
        strategy_range: "Range trading",
        strategy_custom: "Custom",
    },
    builder: Builder {
        title: "Robot Builder",
        subtitle: "Name your robot and choose a platform and strategy.",
        name: "Robot name",
        name_placeholder: "My trend robot",
        platform: "Platform",
        strategy: "Strategy",
        create: "Create robot",
        created: "Robot created",
        create_failed: "Could not create the robot. Please try again.",
    },
    learn: Learn {
        title: "Learn",
        subtitle: "Short lessons that take you from the basics to your first robot.",
        level: "Level",
        level1: "Basics",
        level2: "Strategy",
        level3: "Risk",
        related_step: "Related builder step",
        read_lesson: "Read lesson",
        back_to_lessons: "Back to lessons",
        previous_lesson: "Previous lesson",
        next_lesson: "Next lesson",
        start_builder: "Start Robot Builder",
        basics1_title: "What is a trading robot?",
        basics1_desc: "An introduction to Expert Advisors and automated trading.",
        basics2_title: "MT4 vs MT5 - which should I choose?",
        basics2_desc: "The differences between the two MetaTrader platforms.",
        basics3_title: "Installing a robot in MT4",
        basics3_desc: "Step by step from downloaded file to running robot.",
        strategy1_title: "Your first strategy",
        strategy1_desc: "Turn a trading idea into clear entry and exit rules.",
        strategy2_title: "Indicators explained",
        strategy2_desc: "Moving averages, RSI and other common building blocks.",
        strategy3_title: "Backtesting basics",
        strategy3_desc: "Test your rules on historical data before going live.",
        risk1_title: "Risk management basics",
        risk1_desc: "Stop loss, take profit and why they matter.",
        risk2_title: "Common mistakes",
        risk2_desc: "The pitfalls most new robot traders run into.",
        risk3_title: "Position sizing",
        risk3_desc: "How much to risk on each trade.",
    },
    blog: Blog {
        title: "Blog",
        subtitle: "Articles about automated trading, risk and robots.",
        category_basics: "Basics",
        category_risk: "Risk",
        category_trends: "Trends",
        category_tips: "Tips",
        read_more: "Read more",
        back_to_blog: "Back to blog",
        algorithmic_trading_title: "What is algorithmic trading?",
        algorithmic_trading_excerpt: "How computers execute trades based on predefined rules.",
        robot_risks_title: "The risks of robot trading",
        robot_risks_excerpt: "Why automation does not remove market risk.",
        automation_benefits_title: "The benefits of automated trading",
        automation_benefits_excerpt: "Discipline, speed and consistency without emotions.",
        common_mistakes_title: "Common robot trading mistakes",
        common_mistakes_excerpt: "Over-optimization, missing stop losses and other traps.",
        future_title: "The future of trading robots",
        future_excerpt: "Where automated trading is heading next.",
        demo_testing_title: "Why you should always test on a demo account",
        demo_testing_excerpt: "Practice with virtual money before risking your own.",
    },
    support: Support {
        title: "Support",
        subtitle: "How can we help you?",
        faq_title: "Frequently asked questions",
        contact_title: "Contact us",
        name: "Name",
        email: "Email",
        subject: "Subject",
        category: "Category",
        message: "Message",
        send: "Send message",
        message_sent: "Your message has been sent. We will get back to you soon.",
        send_failed: "Failed to send message. Please try again.",
        category_question: "Question",
        category_bug: "Bug report",
        category_feedback: "Feedback",
        category_other: "Other",
        faq_q1: "Do I need to know how to code?",
        faq_a1: "No. You describe your strategy with simple choices and we generate the code for you.",
        faq_q2: "Which platforms are supported?",
        faq_a2: "Robots can be generated for MetaTrader 4 and MetaTrader 5.",
        faq_q3: "Is the generated robot guaranteed to make money?",
        faq_a3: "No. No robot can guarantee profit. Always test on a demo account first.",
        faq_q4: "Can I edit my robot later?",
        faq_a4: "Yes. Your robots are saved in your dashboard.",
        faq_q5: "Is this financial advice?",
        faq_a5: "No. RobotTrader is an educational tool only.",
    },
    footer: Footer {
        disclaimer: "For educational purposes only. Not financial advice.",
        links_title: "Resources",
    },
    not_found: NotFound {
        title: "404",
        message: "Page not found",
        return_home: "Return home",
    },
};
