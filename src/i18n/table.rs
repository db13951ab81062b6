/// Declares the string table layout: one struct per namespace, the
/// `Translations` aggregate and the `Namespace` enum used for lookups by name.
///
/// Every language module builds a `Translations` value, so a key missing from
/// one language is a compile error rather than a runtime fallback.
macro_rules! string_table {
    ($( $ns:ident : $ty:ident { $( $key:ident ),+ $(,)? } )+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Namespace {
            $( $ty, )+
        }

        impl Namespace {
            pub const ALL: &'static [Namespace] = &[$( Namespace::$ty, )+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Namespace::$ty => stringify!($ns), )+
                }
            }

            pub fn keys(&self) -> &'static [&'static str] {
                match self {
                    $( Namespace::$ty => $ty::KEYS, )+
                }
            }
        }

        $(
            #[derive(Debug)]
            pub struct $ty {
                $( pub $key: &'static str, )+
            }

            impl $ty {
                pub const KEYS: &'static [&'static str] =
                    &[$( stringify!($key), )+];

                pub fn get(&self, key: &str) -> Option<&'static str> {
                    match key {
                        $( stringify!($key) => Some(self.$key), )+
                        _ => None,
                    }
                }
            }
        )+

        #[derive(Debug)]
        pub struct Translations {
            $( pub $ns: $ty, )+
        }

        impl Translations {
            pub fn get(
                &self,
                namespace: Namespace,
                key: &str,
            ) -> Option<&'static str> {
                match namespace {
                    $( Namespace::$ty => self.$ns.get(key), )+
                }
            }
        }
    };
}

string_table! {
    nav: Nav {
        dashboard, robot_builder, learn, support, blog, login, signup,
        logout,
    }
    common: Common {
        brand, loading, back, language_da, language_en,
    }
    landing: Landing {
        hero_title, hero_subtitle, cta_start, cta_learn, how_it_works,
        step1_title, step1_desc, step2_title, step2_desc, step3_title,
        step3_desc, what_you_learn, learn1, learn2, learn3, learn4,
        who_is_for, for_traders, for_beginners, for_curious, disclaimer,
        disclaimer_text,
    }
    auth: Auth {
        login_title, signup_title, email, email_placeholder, password,
        password_placeholder, password_hint, confirm_password, login_button,
        signup_button, no_account, has_account,
    }
    errors: Errors {
        fill_all_fields, invalid_email, password_too_short,
        passwords_mismatch, invalid_credentials, email_unconfirmed,
        already_registered, confirmation_pending, invalid_form, generic,
    }
    dashboard: Dashboard {
        welcome, start_new_robot, go_to_learn, go_to_support, recent_robots,
        no_robots, create_first, delete_robot, deleted, delete_failed,
        load_failed, strategy_trend_following, strategy_breakout,
        strategy_range, strategy_custom,
    }
    builder: Builder {
        title, subtitle, name, name_placeholder, platform, strategy, create,
        created, create_failed,
    }
    learn: Learn {
        title, subtitle, level, level1, level2, level3, related_step,
        read_lesson, back_to_lessons, previous_lesson, next_lesson,
        start_builder, basics1_title, basics1_desc, basics2_title,
        basics2_desc, basics3_title, basics3_desc, strategy1_title,
        strategy1_desc, strategy2_title, strategy2_desc, strategy3_title,
        strategy3_desc, risk1_title, risk1_desc, risk2_title, risk2_desc,
        risk3_title, risk3_desc,
    }
    blog: Blog {
        title, subtitle, category_basics, category_risk, category_trends,
        category_tips, read_more, back_to_blog, algorithmic_trading_title,
        algorithmic_trading_excerpt, robot_risks_title, robot_risks_excerpt,
        automation_benefits_title, automation_benefits_excerpt,
        common_mistakes_title, common_mistakes_excerpt, future_title,
        future_excerpt, demo_testing_title, demo_testing_excerpt,
    }
    support: Support {
        title, subtitle, faq_title, contact_title, name, email, subject,
        category, message, send, message_sent, send_failed,
        category_question, category_bug, category_feedback, category_other,
        faq_q1, faq_a1, faq_q2, faq_a2, faq_q3, faq_a3, faq_q4, faq_a4,
        faq_q5, faq_a5,
    }
    footer: Footer {
        disclaimer, links_title,
    }
    not_found: NotFound {
        title, message, return_home,
    }
}
