//! Chinese (default) text table.

use super::TextPack;

pub(super) static TEXTS: TextPack = TextPack {
    html_lang: "zh-CN",
    title: "我的世界 Backroom 整合包",
    download_title: "下载启动器 - 我的世界 Backroom 整合包",

    nav_download: "下载",
    nav_about: "关于",
    language_toggle: "English",
    back_to_home: "返回主页",

    subtitle: "我的世界整合包",
    poster_alt: "Backroom 整合包海报",

    download_section_title: "下载/观看",
    steps_title: "步骤",
    step_1: "下载启动器",
    step_2: "观看教程视频",
    download_btn_1: "下载启动器",
    download_btn_2: "观看教程",
    download_btn_3: "皮肤设置",

    download_page_title: "下载启动器",
    download_page_subtitle: "选择您的操作系统以下载 Backroom 整合包启动器",
    windows_version: "Windows 版本",
    windows_compatible: "兼容 Windows 10/11",
    mac_version: "Mac 版本",
    mac_compatible: "兼容 macOS 10.14+",
    file_size: "文件大小:",
    version_label: "版本:",
    download_for_windows: "下载 Windows 版",
    download_for_mac: "下载 Mac 版",
    installation_instructions: "安装说明",
    step_1_title: "下载启动器",
    step_2_title: "运行安装程序",
    step_3_title: "跟随安装向导",
    step_4_title: "启动并游玩",
    step_1_desc: "点击上方对应操作系统的下载按钮",
    step_2_desc: "找到下载的文件并运行安装程序",
    step_3_desc: "按照屏幕上的指示完成安装",
    step_4_desc: "启动启动器，开始您的 Backroom 冒险！",

    warning_title: "⚠️ 注意事项",
    warning_1: "本整合包包含恐怖元素，请谨慎游玩",
    warning_2: "推荐4-6人游玩",
    warning_3: "使用游戏内语音聊天系统",
    warning_4: "如感不适请立即停止游玩",
    warning_5: "遇到问题请去B站搜索",

    footer: "© 2025 Backroom 整合包 | 我的世界模组社区",

    tutorial_title: "教程指南",
    launcher_error_title: "启动器报错解决方法",
    modpack_video_title: "整合包安装视频",
    skin_video_title: "皮肤设置视频",
    video_description: "点击即可播放教程视频",
    video_instructions: "观看视频解决报错",
    modpack_instruction_1: "从下载页面下载并安装启动器",
    modpack_instruction_2: "启动 Backroom 整合包启动器",
    modpack_instruction_3: "等待模组和资源自动下载",
    modpack_instruction_4: "开始您的 Backroom 冒险！",
    skin_instruction_1: "在启动器中访问皮肤设置菜单",
    skin_instruction_2: "自定义您的角色外观",
    skin_instruction_3: "应用自定义皮肤和纹理",
    skin_instruction_4: "保存您的偏好设置以备将来使用",
};
