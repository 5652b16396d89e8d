//! English text table. The toggle label shows the language you would switch
//! to, so here it reads 中文.

use super::TextPack;

pub(super) static TEXTS: TextPack = TextPack {
    html_lang: "en",
    title: "Minecraft Backroom Modpack",
    download_title: "Download Launcher - Minecraft Backroom Modpack",

    nav_download: "Download",
    nav_about: "About",
    language_toggle: "中文",
    back_to_home: "Back to Home",

    subtitle: "Minecraft Modpack",
    poster_alt: "Backroom Modpack Poster",

    download_section_title: "Download & Watch",
    steps_title: "Steps",
    step_1: "Download the Launcher",
    step_2: "Watch Tutorial Video",
    download_btn_1: "Download Launcher",
    download_btn_2: "Watch Tutorial",
    download_btn_3: "Skin Settings",

    download_page_title: "Download Launcher",
    download_page_subtitle: "Choose your operating system to download the Backroom Modpack launcher",
    windows_version: "Windows Version",
    windows_compatible: "Compatible with Windows 10/11",
    mac_version: "Mac Version",
    mac_compatible: "Compatible with macOS 10.14+",
    file_size: "File Size:",
    version_label: "Version:",
    download_for_windows: "Download for Windows",
    download_for_mac: "Download for Mac",
    installation_instructions: "Installation Instructions",
    step_1_title: "Download the Launcher",
    step_2_title: "Run the Installer",
    step_3_title: "Follow Setup Wizard",
    step_4_title: "Launch and Play",
    step_1_desc: "Click the download button for your operating system above",
    step_2_desc: "Locate the downloaded file and run the installer",
    step_3_desc: "Follow the on-screen instructions to complete installation",
    step_4_desc: "Start the launcher and begin your Backroom adventure!",

    warning_title: "⚠️ Important Notes",
    warning_1: "This modpack contains horror elements, play with caution",
    warning_2: "Recommended for 4-6 players",
    warning_3: "Use in-game voice chat system",
    warning_4: "Stop playing immediately if you feel uncomfortable",
    warning_5: "For any issues, search on Bilibili",

    footer: "© 2025 Backroom Modpack | Minecraft Modding Community",

    tutorial_title: "Tutorial Guide",
    launcher_error_title: "Launcher Error Solutions",
    modpack_video_title: "Modpack Installation Video",
    skin_video_title: "Skin Settings Video",
    video_description: "Click to play the tutorial video",
    video_instructions: "Watch video to solve errors",
    modpack_instruction_1: "Download and install the launcher from the download page",
    modpack_instruction_2: "Launch the Backroom Modpack launcher",
    modpack_instruction_3: "Wait for mods and resources to download automatically",
    modpack_instruction_4: "Start your Backroom adventure!",
    skin_instruction_1: "Access the skin settings menu in the launcher",
    skin_instruction_2: "Customize your character's appearance",
    skin_instruction_3: "Apply custom skins and textures",
    skin_instruction_4: "Save your preferences for future sessions",
};
