//! Presentation layer: utility classes per component part and state.
//!
//! Components ask for a [`Style`] instead of spelling out classes, so the
//! look can change without touching rendering logic.

use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Style {
    HeaderRoot,
    HeaderTop,
    HeaderRow,
    LogoWide,
    LogoCompact,
    Tabs,
    Tab,
    ActiveTab,
    MenuToggleButton,
    Avatar,
    ProfileMenu,
    LevelBadge,
    MenuDivider,
    ListIcon,
    LoginButton,
    SearchInput,
    ReplyRoot,
    ReplySection,
    NotInRangeInfo,
    ReplyFooter,
    ActionButton,
    DisabledAction,
    CopyButton,
    FeedbackButton,
    ActiveFeedback,
    ExpandableText,
    CollapsedText,
    HyperlinkCard,
    Skeleton,
}

impl Style {
    pub fn class(self) -> &'static str {
        match self {
            Self::HeaderRoot => "sticky top-0 z-10 h-[104px] lg:h-[60px]",
            Self::HeaderTop => {
                "flex h-[60px] items-center justify-between bg-white px-4 lg:px-8"
            }
            Self::HeaderRow => "flex",
            Self::LogoWide => "w-[240px] h-auto",
            Self::LogoCompact => "w-[100px] h-auto",
            Self::Tabs => {
                "mr-auto flex justify-between h-[44px] w-[calc(100%-48px)] bg-secondary/10 \
                 lg:h-auto lg:w-auto lg:bg-inherit lg:text-xl lg:px-2.5"
            }
            Self::Tab => {
                "flex-1 p-2 text-center no-underline whitespace-nowrap font-medium \
                 tracking-wide text-secondary/60 lg:text-secondary lg:px-2.5"
            }
            Self::ActiveTab => "text-secondary lg:text-primary",
            Self::MenuToggleButton => {
                "flex w-12 h-[44px] items-center justify-center bg-secondary/60 text-white"
            }
            Self::Avatar => "w-10 h-10 rounded-full cursor-pointer",
            Self::ProfileMenu => {
                "absolute right-4 top-[60px] z-20 menu p-2 shadow bg-secondary \
                 text-white rounded-box w-56"
            }
            Self::LevelBadge => "relative -left-2 font-bold bg-primary text-secondary px-4 py-0.5",
            Self::MenuDivider => "divider my-0 before:bg-secondary/40 after:bg-secondary/40",
            Self::ListIcon => "text-secondary/60 pr-2 h-5 w-5",
            Self::LoginButton => "btn btn-sm",
            Self::SearchInput => "input input-bordered input-sm w-40 lg:w-72",
            Self::ReplyRoot => {
                "p-6 border border-base-300 border-t-0 first:border-t hover:bg-black/5"
            }
            Self::ReplySection => "mb-4",
            Self::NotInRangeInfo => "inline-block ml-2 text-xs opacity-75",
            Self::ReplyFooter => "flex flex-wrap items-center gap-1 text-sm",
            Self::ActionButton => "btn btn-link btn-xs",
            Self::DisabledAction => "btn-disabled opacity-50",
            Self::CopyButton => "btn btn-ghost btn-xs",
            Self::FeedbackButton => "btn btn-ghost btn-xs gap-1",
            Self::ActiveFeedback => "text-primary",
            Self::ExpandableText => "whitespace-normal break-words",
            Self::CollapsedText => "line-clamp-4",
            Self::HyperlinkCard => "card card-compact bg-base-200 my-2 p-3",
            Self::Skeleton => "skeleton h-24 w-full",
        }
    }
}

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;
