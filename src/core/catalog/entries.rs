//! Static catalog contents, one builder chain per entry.

use super::{ActionKind, Link, Tool, VersionSource};

pub(super) fn all() -> Vec<Tool> {
    vec![
        // Debloat (page 1)
        Tool::new("d1-1", "EchoX", ActionKind::Download, "https://github.com/UnLovedCookie/EchoX")
            .link(Link::new(
                "EchoX",
                "",
                "EchoX.bat",
                &["https://github.com/UnLovedCookie/EchoX/releases/latest/download/EchoX.bat"],
            )),
        Tool::new("d2-1", "Hone", ActionKind::Download, "https://hone.gg")
            .link(Link::new(
                "Hone ⚠️ CONTAINS ADS ⚠️",
                "",
                "HoneInstaller.exe",
                &["https://download.overwolf.com/installer/prod/cfbc7eeb79ab95eb3f553c4344a186ee/Hone%20-%20Installer.exe"],
            ))
            .link(Link::new(
                "HoneCTRL",
                "",
                "HoneCtrl.bat",
                &["https://raw.githubusercontent.com/luke-beep/HoneCTRL/main/HoneCtrl.bat"],
            )),
        Tool::new(
            "d3-1",
            "ShutUp10++",
            ActionKind::Download,
            "https://www.oo-software.com/shutup10",
        )
        .link(Link::new(
            "ShutUp10++",
            "",
            "ShutUp10.exe",
            &["https://dl5.oo-software.com/files/ooshutup10/OOSU10.exe"],
        )),
        Tool::new(
            "d4-1",
            "Optimizer",
            ActionKind::Download,
            "https://github.com/hellzerg/optimizer",
        )
        .latest_from(VersionSource::github("hellzerg/optimizer"))
        .link(Link::new(
            "Optimizer",
            "",
            "Optimizer.exe",
            &["https://github.com/hellzerg/optimizer/releases/latest/download/Optimizer-", ".exe"],
        )),
        Tool::new(
            "d5-1",
            "PyDebloatX",
            ActionKind::Download,
            "https://github.com/Teraskull/PyDebloatX",
        )
        .link(Link::new(
            "PyDebloatX",
            "",
            "PyDebloatX-Portable.exe",
            &["https://github.com/Teraskull/PyDebloatX/releases/latest/download/PyDebloatX_portable.exe"],
        )),
        Tool::new(
            "d6-1",
            "QuickBoost",
            ActionKind::Download,
            "https://github.com/SanGraphic/QuickBoost",
        )
        .link(Link::new(
            "QuickBoost",
            "",
            "QuickBoost.exe",
            &["https://github.com/SanGraphic/QuickBoost/releases/latest/download/QuickBoost.exe"],
        )),
        Tool::new(
            "d7-1",
            "WindowsSpyBlocker",
            ActionKind::Download,
            "https://github.com/crazy-max/WindowsSpyBlocker",
        )
        .link(Link::new(
            "WindowsSpyBlocker",
            "",
            "WindowsSpyBlocker.exe",
            &["https://github.com/crazy-max/WindowsSpyBlocker/releases/latest/download/WindowsSpyBlocker.exe"],
        )),
        Tool::new(
            "d8-1",
            "PrivateZilla",
            ActionKind::Download,
            "https://github.com/builtbybel/privatezilla",
        )
        .link(Link::new(
            "PrivateZilla",
            "",
            "PrivateZilla.zip",
            &["https://github.com/builtbybel/privatezilla/releases/latest/download/privatezilla.zip"],
        )),
        Tool::new(
            "d9-1",
            "ZusierAIO",
            ActionKind::Download,
            "https://github.com/Zusier/Zusiers-optimization-Batch",
        )
        .link(Link::new(
            "ZusierAIO",
            "",
            "ZusierAIO.bat",
            &["https://raw.githubusercontent.com/Zusier/Zusiers-optimization-Batch/master/Zusier%20AIO.bat"],
        )),
        Tool::new("d10-1", "CoutX", ActionKind::Download, "https://github.com/UnLovedCookie/CoutX")
            .link(Link::new(
                "CoutX",
                "",
                "CoutX-Setup.exe",
                &["https://github.com/UnLovedCookie/CoutX/releases/latest/download/CoutX-Setup.exe"],
            )),
        Tool::new("d11-1", "WPD", ActionKind::Download, "https://wpd.app/")
            .link(Link::new("WPD", "", "WPD.zip", &["https://wpd.app/get/latest.zip"])),
        // Tweaks (page 1)
        Tool::new(
            "t1-1",
            "InsiderEnroller",
            ActionKind::Download,
            "https://github.com/Jathurshan-2019/Insider-Enroller",
        )
        .latest_from(VersionSource::github("Jathurshan-2019/Insider-Enroller"))
        .link(Link::new(
            "InsiderEnroller",
            "",
            "InsiderEnroller.zip",
            &[
                "https://github.com/Jathurshan-2019/Insider-Enroller/releases/latest/download/Insider_Enrollerv",
                ".zip",
            ],
        )),
        Tool::new(
            "t2-1",
            "Windows11Fixer",
            ActionKind::Download,
            "https://github.com/99natmar99/Windows-11-Fixer",
        )
        .latest_from(VersionSource::github("99natmar99/Windows-11-Fixer"))
        .link(Link::new(
            "Windows11Fixer",
            "",
            "Windows11Fixer.zip",
            &[
                "https://github.com/99natmar99/Windows-11-Fixer/releases/latest/download/Windows.11.Fixer.v",
                ".Portable.zip",
            ],
        )),
        Tool::new(
            "t3-1",
            "NoRoundedCorners",
            ActionKind::Download,
            "https://github.com/valinet/Win11DisableRoundedCorners",
        )
        .link(Link::new(
            "AntiRoundCorners",
            "",
            "AntiRoundCorners.exe",
            &["https://github.com/valinet/Win11DisableRoundedCorners/releases/latest/download/Win11DisableOrRestoreRoundedCorners.exe"],
        )),
        Tool::new(
            "t4-1",
            "Fix Drag&Drop",
            ActionKind::Download,
            "https://github.com/HerMajestyDrMona/Windows11DragAndDropToTaskbarFix",
        )
        .link(Link::new(
            "Fix Drag&Drop",
            "",
            "FixDragAndDrop.exe",
            &["https://github.com/HerMajestyDrMona/Windows11DragAndDropToTaskbarFix/releases/latest/download/Windows11DragAndDropToTaskbarFix.exe"],
        )),
        Tool::new(
            "t5-1",
            "Winaero Tweaker",
            ActionKind::Download,
            "https://winaero.com/winaero-tweaker/",
        )
        .link(Link::new(
            "Winaero Tweaker",
            "",
            "WinaeroTweaker.zip",
            &["https://winaerotweaker.com/download/winaerotweaker.zip"],
        )),
        Tool::new(
            "t6-1",
            "CTT",
            ActionKind::RunShell,
            "https://github.com/ChrisTitusTech/winutil/blob/main/winutil.ps1",
        )
        .link(Link::new("CTT", "", "", &["irm christitus.com/win | iex"])),
        Tool::new("t7-1", "REAL", ActionKind::Download, "https://github.com/miniant-git/REAL")
            .link(Link::new(
                "REAL",
                "",
                "REAL.exe",
                &["https://github.com/miniant-git/REAL/releases/latest/download/REAL.exe"],
            )),
        Tool::new("t8-1", "NVCleanstall", ActionKind::OpenWeb, "")
            .link(Link::new(
                "NVCleanstall",
                "",
                "",
                &["https://www.techpowerup.com/download/techpowerup-nvcleanstall/"],
            )),
        Tool::new(
            "t9-1",
            "SophiApp",
            ActionKind::Download,
            "https://github.com/Sophia-Community/SophiApp",
        )
        .latest_from(VersionSource::github("Sophia-Community/SophiApp"))
        .link(Link::new(
            "SophiApp",
            "",
            "SophiApp.zip",
            &["https://github.com/Sophia-Community/SophiApp/releases/download/", "/SophiApp.zip"],
        )),
        Tool::new("t10-1", "PrivacySexy", ActionKind::Download, "https://privacy.sexy/")
            .latest_from(VersionSource::github("undergroundwires/privacy.sexy"))
            .link(Link::new(
                "PrivacySexy",
                "",
                "PrivacySexy-setup.exe",
                &[
                    "https://github.com/undergroundwires/privacy.sexy/releases/latest/download/privacy.sexy-Setup-",
                    ".exe",
                ],
            )),
        // Apps (page 1)
        Tool::new(
            "a1-1",
            "Choco",
            ActionKind::Download,
            "https://github.com/xemulat/XToolbox/blob/main/files/choco.bat",
        )
        .link(Link::new(
            "Choco",
            "",
            "choco.bat",
            &["https://raw.githubusercontent.com/xemulat/XToolBox/main/files/choco.bat"],
        )),
        Tool::new("a2-1", "Brave Browser", ActionKind::Download, "https://brave.com/")
            .link(Link::new(
                "Brave Browser",
                "",
                "Brave-Setup.exe",
                &["https://referrals.brave.com/latest/BraveBrowserSetup.exe"],
            )),
        Tool::new("a3-1", "Firefox Setup", ActionKind::Download, "https://www.mozilla.org/firefox")
            .link(Link::new(
                "Firefox Setup",
                "",
                "Firefox-Setup.exe",
                &["https://download.mozilla.org/?product=firefox-stub&os=win&lang=en-US"],
            )),
        Tool::new(
            "a4-1",
            "Lively Wallpaper",
            ActionKind::Download,
            "https://github.com/rocksdanister/lively",
        )
        .latest_from(VersionSource::github("rocksdanister/lively").without_dots())
        .link(Link::new(
            "Lively Wallpaper",
            "",
            "LivelyWallpaper-Setup.exe",
            &[
                "https://github.com/rocksdanister/lively/releases/latest/download/lively_setup_x86_full_v",
                ".exe",
            ],
        )),
        Tool::new("a5-1", "Floorp", ActionKind::Download, "https://floorp.app/")
            .link(Link::new(
                "Floorp",
                "",
                "Floorp-Setup.exe",
                &["https://github.com/Floorp-Projects/Floorp/releases/latest/download/floorp-stub.installer.exe"],
            )),
        Tool::new(
            "a6-1",
            "qBittorrent EE",
            ActionKind::Download,
            "https://github.com/c0re100/qBittorrent-Enhanced-Edition",
        )
        .latest_from(VersionSource::github("c0re100/qBittorrent-Enhanced-Edition"))
        .link(Link::new(
            "qBittorrent Enhanced Edition",
            "",
            "qBittorrent-EE-Setup.exe",
            &[
                "https://github.com/c0re100/qBittorrent-Enhanced-Edition/releases/latest/download/qbittorrent_enhanced_",
                "_qt6_x64_setup.exe",
            ],
        )),
        Tool::new(
            "a7-1",
            "Rainmeter",
            ActionKind::Download,
            "https://github.com/rainmeter/rainmeter",
        )
        .link(Link::new(
            "Rainmeter",
            "",
            "Rainmeter-Setup.exe",
            &["https://github.com/rainmeter/rainmeter/releases/download/v4.5.17.3700/Rainmeter-4.5.17.exe"],
        )),
        Tool::new(
            "a8-1",
            "7-Zip ZSTD",
            ActionKind::Download,
            "https://github.com/mcmilk/7-Zip-zstd",
        )
        .link(Link::new(
            "7-Zip",
            "",
            "7Zip-zstd.exe",
            &["https://github.com/mcmilk/7-Zip-zstd/releases/download/v22.01-v1.5.5-R3/7z22.01-zstd-x64.exe"],
        )),
        Tool::new(
            "a9-1",
            "Memory Cleaner",
            ActionKind::Download,
            "https://www.koshyjohn.com/software/memclean/",
        )
        .link(Link::new(
            "Memory Cleaner",
            "",
            "MemoryCleaner.exe",
            &["https://www.koshyjohn.com/software/MemClean.exe"],
        )),
        Tool::new("a10-1", "Nilesoft Shell", ActionKind::Download, "https://nilesoft.org/")
            .link(Link::new(
                "Nilesoft Shell",
                "",
                "Shell-Setup.exe",
                &["https://nilesoft.org/download/shell/1.9/setup.exe"],
            )),
        Tool::new(
            "a11-1",
            "SimpleDnsCrypt",
            ActionKind::Download,
            "https://github.com/instantsc/SimpleDnsCrypt",
        )
        .latest_from(VersionSource::github("instantsc/SimpleDnsCrypt"))
        .link(Link::new(
            "SimpleDnsCrypt",
            "",
            "SimpleDNSCrypt-Setup.msi",
            &[
                "https://github.com/instantsc/SimpleDnsCrypt/releases/latest/download/SimpleDNSCrypt_",
                ".msi",
            ],
        )),
        // Cleaning (page 1)
        Tool::new(
            "c1-1",
            "ADW Cleaner",
            ActionKind::Download,
            "https://www.malwarebytes.com/adwcleaner",
        )
        .link(Link::new(
            "ADW Cleaner",
            "",
            "ADW-Cleaner.exe",
            &["https://adwcleaner.malwarebytes.com/adwcleaner?channel=release"],
        )),
        Tool::new(
            "c2-1",
            "ATF Cleaner",
            ActionKind::Download,
            "https://www.majorgeeks.com/files/details/atf_cleaner.html",
        )
        .link(Link::new(
            "ATF Cleaner",
            "",
            "ATF-Cleaner.exe",
            &["https://files1.majorgeeks.com/10afebdbffcd4742c81a3cb0f6ce4092156b4375/drives/ATF-Cleaner.exe"],
        )),
        Tool::new("c3-1", "Defraggler", ActionKind::Download, "https://www.ccleaner.com/defraggler")
            .link(Link::new(
                "Defraggler",
                "",
                "Defraggler-Setup.exe",
                &["https://download.ccleaner.com/dfsetup222.exe"],
            )),
        Tool::new("c4-1", "Malwarebytes", ActionKind::Download, "https://www.malwarebytes.com/")
            .link(Link::new(
                "Malwarebytes",
                "",
                "Malwarebytes.exe",
                &["https://www.malwarebytes.com/api/downloads/mb-windows?filename=MBSetup.exe"],
            )),
        Tool::new(
            "c5-1",
            "Emsisoft EK",
            ActionKind::Download,
            "https://www.emsisoft.com/en/emergency-kit/",
        )
        .link(Link::new(
            "Emsisoft Emergency Kit",
            "",
            "EmsisoftEmergencyKit.exe",
            &["https://dl.emsisoft.com/EmsisoftEmergencyKit.exe"],
        )),
        Tool::new(
            "c6-1",
            "CleanmgrPlus",
            ActionKind::Download,
            "https://github.com/builtbybel/CleanmgrPlus",
        )
        .link(Link::new(
            "CleanmgrPlus",
            "",
            "CleanmgrPlus.zip",
            &["https://github.com/builtbybel/CleanmgrPlus/releases/latest/download/cleanmgrplus.zip"],
        )),
        Tool::new("c7-1", "Glary Utilities", ActionKind::Download, "https://www.glarysoft.com/")
            .link(Link::new(
                "Glary Utilities",
                "",
                "GlaryUtilities.exe",
                &["https://download.glarysoft.com/gu5setup.exe"],
            )),
        Tool::new("c8-1", "ESET", ActionKind::Download, "https://www.eset.com/int/home/free-trial/")
            .link(Link::new(
                "ESET Home Security Premium",
                "",
                "ESETHomeSecurityPremium.exe",
                &["https://download.eset.com/com/eset/tools/installers/live_essp/latest/eset_smart_security_premium_live_installer.exe"],
            ))
            .link(Link::new(
                "ESET Home Security Essential",
                "",
                "ESETHomeSecurityEssential.exe",
                &["https://download.eset.com/com/eset/tools/installers/live_eis/latest/eset_internet_security_live_installer.exe"],
            ))
            .link(Link::new(
                "ESET Online Scanner",
                "",
                "ESETOnlineScanner.exe",
                &["https://download.eset.com/com/eset/tools/online_scanner/latest/esetonlinescanner.exe"],
            )),
        Tool::new("c9-1", "Kaspersky", ActionKind::OpenWeb, "https://www.kaspersky.com/downloads/")
            .link(Link::new("Kaspersky Plus", "", "", &["https://www.kaspersky.com/downloads/plus"]))
            .link(Link::new(
                "Kaspersky Standard",
                "",
                "",
                &["https://www.kaspersky.com/downloads/standard"],
            ))
            .link(Link::new(
                "Kaspersky Premium",
                "",
                "",
                &["https://www.kaspersky.com/downloads/premium"],
            )),
        // Linux (page 2)
        Tool::new("l1-2", "Linux Mint", ActionKind::Download, "https://linuxmint.com/")
            .link(Link::new(
                "Linux Mint Cinnamon",
                "Cinnamon",
                "LinuxMint-Cinnamon.iso",
                &["https://mirror.rackspace.com/linuxmint/iso/stable/%MINTVERSION%/linuxmint-%MINTVERSION%-cinnamon-64bit.iso"],
            ))
            .link(Link::new(
                "Linux Mint MATE",
                "MATE",
                "LinuxMint-MATE.iso",
                &["https://mirror.rackspace.com/linuxmint/iso/stable/%MINTVERSION%/linuxmint-%MINTVERSION%-mate-64bit.iso"],
            ))
            .link(Link::new(
                "Linux Mint Xfce",
                "Xfce",
                "LinuxMint-Xfce.iso",
                &["https://mirror.rackspace.com/linuxmint/iso/stable/%MINTVERSION%/linuxmint-%MINTVERSION%-xfce-64bit.iso"],
            )),
        Tool::new("l2-2", "Pop!_OS", ActionKind::Download, "https://pop.system76.com/")
            .link(Link::new("Pop!_OS Nvidia", "Nvidia", "PopOS-Nvidia.iso", &["%POP%,nvidia"]))
            .link(Link::new("Pop!_OS RPI", "RPI4", "PopOS-RPI.img.xz", &["%POP%,raspi"]))
            .link(Link::new("Pop!_OS LTS", "LTS", "PopOS-LTS.iso", &["%POP%,intel"])),
        Tool::new("l3-2", "Ubuntu", ActionKind::Download, "https://ubuntu.com/")
            .link(Link::new(
                "Ubuntu",
                "",
                "Ubuntu.iso",
                &["https://cdimage.ubuntu.com/ubuntu/releases/%UBUNTUVERSION%/release/ubuntu-%UBUNTUVERSION%-desktop-legacy-amd64.iso"],
            ))
            .link(Link::new(
                "Kubuntu",
                "",
                "Kubuntu.iso",
                &["https://cdimage.ubuntu.com/kubuntu/releases/%UBUNTUVERSION%/release/kubuntu-%UBUNTUVERSION%-desktop-amd64.iso"],
            ))
            .link(Link::new(
                "Lubuntu",
                "",
                "Lubuntu.iso",
                &["https://cdimage.ubuntu.com/xubuntu/releases/%UBUNTUVERSION%/release/xubuntu-%UBUNTUVERSION%-desktop-amd64.iso"],
            )),
        Tool::new("l4-2", "Arch Linux", ActionKind::Download, "https://archlinux.org/")
            .link(Link::new(
                "ArchLinux.iso",
                "Latest",
                "ArchLinux.iso",
                &["https://mirror.rackspace.com/archlinux/iso/latest/archlinux-x86_64.iso"],
            )),
        Tool::new("l5-2", "Atrix Linux", ActionKind::Download, "https://artixlinux.org/")
            .link(Link::new("Artix Plasma", "Plasma", "Artix-Plasma.iso", &["%ARTIX%,plasma"]))
            .link(Link::new("Atrix Xfce", "Xfce", "Artix-Xfce.iso", &["%ARTIX%,xfce"]))
            .link(Link::new("Artix Cinnamon", "Cinnamon", "Artix-Cinnamon.iso", &["%ARTIX%,cinnamon"])),
        Tool::new("l6-2", "Solus", ActionKind::Download, "https://getsol.us/")
            .link(Link::new("Solus Budgie", "Budgie", "Solus-Budgie.iso", &["%SOLUS%,Budgie"]))
            .link(Link::new("Solus Plasma", "Plasma", "Solus-Plasma.iso", &["%SOLUS%,Plasma"]))
            .link(Link::new("Solus GNOME", "GNOME", "Solus-GNOME.iso", &["%SOLUS%,GNOME"])),
        Tool::new("l7-2", "Debian", ActionKind::Download, "https://www.debian.org/")
            .link(Link::new("Debian NetInstall", "NetInst", "Debian-NetInst.iso", &["%DEBIAN%"])),
        Tool::new("l8-2", "Garuda Linux", ActionKind::Download, "https://garudalinux.org/")
            .link(Link::new(
                "Garuda DR460NIZED Gaming",
                "DR460NIZED",
                "Garuda-DR460NIZED.iso",
                &["https://iso.builds.garudalinux.org/iso/latest/garuda/dr460nized-gaming/latest.iso?r2=1"],
            ))
            .link(Link::new(
                "Garuda GNOME",
                "GNOME",
                "Garuda-GNOME.iso",
                &["https://iso.builds.garudalinux.org/iso/latest/garuda/gnome/latest.iso?r2=1"],
            ))
            .link(Link::new(
                "Garuda Xfce",
                "Xfce",
                "Garuda-Xfce.iso",
                &["https://iso.builds.garudalinux.org/iso/latest/garuda/xfce/latest.iso?r2=1"],
            )),
        Tool::new("l9-2", "EndeavourOS", ActionKind::Download, "https://zorin.com/os/")
            .link(Link::new(
                "EndeavourOS",
                "",
                "EndeavourOS.iso",
                &["https://mirror.moson.org/endeavouros/iso/%ENDEAVOUR%"],
            )),
        Tool::new("l10-2", "CachyOS", ActionKind::Download, "https://cachyos.org/")
            .link(Link::new(
                "CachyOS Desktop",
                "Desktop",
                "CachyOS-Desktop.iso",
                &["https://cdn77.cachyos.org/ISO/desktop/%CACHYVERSION%/cachyos-desktop-linux-%CACHYVERSION%.iso"],
            ))
            .link(Link::new(
                "CachyOS Handheld",
                "Handheld",
                "CachyOS-Handheld.iso",
                &["https://cdn77.cachyos.org/ISO/desktop/%CACHYVERSION%/cachyos-desktop-linux-%CACHYVERSION%.iso"],
            )),
        // Windows (page 2)
        Tool::new("w1-2", "Windows 11", ActionKind::Download, "Windows 11")
            .link(Link::new(
                "Windows 11 x64",
                "",
                "Windows11-x64.iso",
                &["https://dl.bobpony.com/windows/11/en-us_windows_11_23h2_x64.iso"],
            ))
            .link(Link::new(
                "Windows 11 LTSC",
                "",
                "Windows11-LTSC.iso",
                &["https://drive.massgrave.dev/en-us_windows_11_iot_enterprise_ltsc_2024_x64_dvd_f6b14814.iso"],
            )),
        Tool::new("w2-2", "Windows 10", ActionKind::Download, "Windows 10")
            .link(Link::new(
                "Windows 10 x64",
                "",
                "Windows10-x64.iso",
                &["https://drive.massgrave.dev/en-gb_windows_10_consumer_editions_version_22h2_updated_nov_2024_x64_dvd_3eeacab9.iso"],
            ))
            .link(Link::new(
                "Windows 10 LTSC (recommended)",
                "",
                "Windows10-LTSC.iso",
                &["https://drive.massgrave.dev/en-us_windows_10_iot_enterprise_ltsc_2021_x64_dvd_257ad90f.iso"],
            )),
        Tool::new("w3-2", "Windows 8.1", ActionKind::Download, "Windows 8.1")
            .link(Link::new(
                "Windows 8.1",
                "",
                "Windows8.1-x64.iso",
                &["https://dl.bobpony.com/windows/8.x/8.1/en_windows_8.1_enterprise_with_update_x64_dvd_6054382.iso"],
            ))
            .link(Link::new(
                "Windows 8.1",
                "",
                "Windows8.1-x86.7z",
                &["https://dl.bobpony.com/windows/8.x/8.1/en_windows_8.1_enterprise_with_update_x86_dvd_6050710.7z"],
            )),
        Tool::new("w4-2", "Windows 8", ActionKind::Download, "Windows 8")
            .link(Link::new(
                "Windows 8 x64",
                "",
                "Windows8-x64.iso",
                &["https://dl.bobpony.com/windows/8.x/8.0/en_windows_8_x64_dvd_915440.iso"],
            ))
            .link(Link::new(
                "Windows 8 x86",
                "",
                "Windows8-x86.iso",
                &["https://dl.bobpony.com/windows/8.x/8.0/en_windows_8_x86_dvd_915417.iso"],
            )),
        Tool::new("w5-2", "Windows 7", ActionKind::Download, "Windows 7")
            .link(Link::new(
                "Windows 7 x64",
                "",
                "Windows7-x64.7z",
                &["https://dl.bobpony.com/windows/7/updated/7601.24214.180801-1700.win7sp1_ldr_escrow_CLIENT_PROFESSIONAL_x64FRE_en-us.7z"],
            ))
            .link(Link::new(
                "Windows 7 x86",
                "",
                "Windows7-x86.7z",
                &["https://dl.bobpony.com/windows/7/updated/7601.24214.180801-1700.win7sp1_ldr_escrow_CLIENT_PROFESSIONAL_x86FRE_en-us.7z"],
            )),
        // Modding (page 2)
        Tool::new("m1-2", "AME Wizard", ActionKind::Download, "https://ameliorated.io/")
            .link(Link::new(
                "AME Wizard",
                "",
                "AMEWizard.zip",
                &["https://download.ameliorated.io/AME%20Wizard%20Beta.zip"],
            )),
        Tool::new("m2-2", "ReviOS", ActionKind::Download, "https://revi.cc/")
            .latest_from(VersionSource::github("meetrevision/playbook"))
            .link(Link::new(
                "ReviOS Playbook",
                "",
                "ReviOS.apbx",
                &["https://github.com/meetrevision/playbook/releases/download/", "/Revi-PB-", ".apbx"],
            )),
        Tool::new("m3-2", "AtlasOS", ActionKind::Download, "https://github.com/Atlas-OS/Atlas")
            .latest_from(VersionSource::github("Atlas-OS/Atlas"))
            .link(Link::new(
                "AtlasOS Playbook",
                "",
                "AtlasPlaybook.zip",
                &[
                    "https://github.com/Atlas-OS/Atlas/releases/latest/download/AtlasPlaybook_v",
                    ".apbx",
                ],
            )),
        Tool::new("m4-2", "AME Playbook", ActionKind::Download, "https://ameliorated.io/")
            .link(Link::new(
                "AME 10",
                "",
                "AME10.apbx",
                &["https://download.ameliorated.io/AME%2010%20Beta.apbx"],
            ))
            .link(Link::new(
                "AME 11",
                "",
                "AME11.apbx",
                &["https://download.ameliorated.io/AME%2011%20Beta.apbx"],
            )),
        Tool::new(
            "m5-2",
            "Rectify11",
            ActionKind::Download,
            "https://github.com/Rectify11/Installer",
        )
        .link(Link::new(
            "Rectify11 Installer",
            "",
            "Rectify11Installer.exe",
            &["https://github.com/Rectify11/Installer/releases/latest/download/Rectify11Installer.exe"],
        )),
        Tool::new(
            "m6-2",
            "Ghost Spectre",
            ActionKind::OpenWeb,
            "https://ghostclouds.xyz/wp/w10-pro-aio-x64/",
        )
        .link(Link::new("Ghost Spectre", "", "GhostSpectre.WPE64", &["%GHOSTSPECTRE%"])),
        // Tools (page 2)
        Tool::new("a1-2", "Rufus", ActionKind::Download, "https://github.com/pbatard/rufus")
            .latest_from(VersionSource::github("pbatard/rufus"))
            .link(Link::new(
                "Rufus",
                "",
                "Rufus.exe",
                &["https://github.com/pbatard/rufus/releases/latest/download/rufus-", ".exe"],
            )),
        Tool::new(
            "a2-2",
            "Balena Etcher",
            ActionKind::Download,
            "https://github.com/balena-io/etcher",
        )
        .link(Link::new(
            "Balena Etcher",
            "",
            "Etcher-Portable.exe",
            &["https://github.com/balena-io/etcher/releases/download/v1.18.11/balenaEtcher-Portable-1.18.11.exe"],
        )),
        Tool::new(
            "a3-2",
            "HeiDoc Iso Dwnlder",
            ActionKind::Download,
            "https://www.heidoc.net/joomla/technology-science/microsoft/67-microsoft-windows-and-office-iso-download-tool",
        )
        .link(Link::new(
            "HeiDoc Iso Downloader",
            "",
            "HeiDoc-ISO-Downloader.exe",
            &["https://www.heidoc.net/php/Windows-ISO-Downloader.exe"],
        )),
        Tool::new(
            "a4-2",
            "KeePassXC",
            ActionKind::Download,
            "https://github.com/keepassxreboot/keepassxc",
        )
        .latest_from(VersionSource::github("keepassxreboot/keepassxc"))
        .link(Link::new(
            "KeePassXC",
            "",
            "KeePassXC-Setup.msi",
            &[
                "https://github.com/keepassxreboot/keepassxc/releases/latest/download/KeePassXC-",
                "-Win64.msi",
            ],
        )),
        Tool::new(
            "a5-2",
            "PowerToys",
            ActionKind::Download,
            "https://github.com/microsoft/PowerToys",
        )
        .latest_from(VersionSource::github("microsoft/PowerToys"))
        .link(Link::new(
            "PowerToys",
            "",
            "PowerToys-Setup.exe",
            &[
                "https://github.com/microsoft/PowerToys/releases/latest/download/PowerToysSetup-",
                "-x64.exe",
            ],
        )),
        Tool::new(
            "a6-2",
            "Alacritty",
            ActionKind::Download,
            "https://github.com/alacritty/alacritty",
        )
        .latest_from(VersionSource::github("alacritty/alacritty"))
        .link(Link::new(
            "Alacritty",
            "",
            "Alacritty-Setup.exe",
            &[
                "https://github.com/alacritty/alacritty/releases/latest/download/Alacritty-",
                "-installer.msi",
            ],
        )),
        Tool::new(
            "a7-2",
            "PowerShell 7",
            ActionKind::Download,
            "https://github.com/PowerShell/PowerShell",
        )
        .latest_from(VersionSource::github("PowerShell/PowerShell"))
        .link(Link::new(
            "PowerShell",
            "",
            "PowerShell-Setup.msi",
            &[
                "https://github.com/PowerShell/PowerShell/releases/latest/download/PowerShell-",
                "-win-x64.msi",
            ],
        )),
        Tool::new("a8-2", "Motrix", ActionKind::Download, "https://github.com/agalwood/Motrix")
            .latest_from(VersionSource::github("agalwood/Motrix"))
            .link(Link::new(
                "Motrix",
                "",
                "Motrix-Setup.exe",
                &["https://github.com/agalwood/Motrix/releases/latest/download/Motrix-Setup-", ".exe"],
            )),
        Tool::new("a9-2", "Files", ActionKind::Download, "https://files.community/")
            .link(Link::new(
                "Files",
                "",
                "Files.appinstaller",
                &["https://files.community/appinstallers/Files.preview.appinstaller"],
            )),
        Tool::new("a10-2", "VSCode", ActionKind::Download, "https://vscodium.com/")
            .latest_from(VersionSource::github("VSCodium/vscodium"))
            .link(Link::new(
                "VSCodium",
                "",
                "VSCodium-Setup.msi",
                &["https://github.com/VSCodium/vscodium/releases/download/", "/VSCodium-x64-", ".msi"],
            ))
            .link(Link::new(
                "VSCode",
                "",
                "VSCode-Setup.exe",
                &["https://code.visualstudio.com/sha/download?build=stable&os=win32-x64-user"],
            )),
        // Launchers (page 3)
        Tool::new(
            "l1-3",
            "PrismLauncher",
            ActionKind::Download,
            "https://github.com/PrismLauncher/PrismLauncher",
        )
        .latest_from(VersionSource::github("PrismLauncher/PrismLauncher"))
        .link(Link::new(
            "Prism Launcher Setup",
            "",
            "PrismLauncher-Setup.exe",
            &[
                "https://github.com/PrismLauncher/PrismLauncher/releases/download/",
                "/PrismLauncher-Windows-MSVC-Setup-",
                ".exe",
            ],
        )),
        Tool::new("l2-3", "Minecraft Launcher", ActionKind::Download, "https://www.minecraft.net")
            .link(Link::new(
                "Minecraft Launcher",
                "",
                "MinecraftInstaller.exe",
                &["https://launcher.mojang.com/download/MinecraftInstaller.exe"],
            )),
        Tool::new(
            "l3-3",
            "ATLauncher",
            ActionKind::Download,
            "https://github.com/ATLauncher/ATLauncher",
        )
        .latest_from(VersionSource::github("ATLauncher/ATLauncher"))
        .link(Link::new(
            "ATLauncher",
            "",
            "ATLauncher-Setup.exe",
            &[
                "https://github.com/ATLauncher/ATLauncher/releases/latest/download/ATLauncher-",
                ".exe",
            ],
        )),
        Tool::new(
            "l4-3",
            "GDLauncher",
            ActionKind::Download,
            "https://github.com/gorilla-devs/GDLauncher",
        )
        .latest_from(VersionSource::github("gorilla-devs/GDLauncher"))
        .link(Link::new(
            "Portable",
            "GDLauncher Portable",
            "GDLauncher-Portable.zip",
            &["https://github.com/gorilla-devs/GDLauncher/releases/download/v/GDLauncher-win-portable.zip"],
        ))
        .link(Link::new(
            "Setup",
            "GDLauncher Setup",
            "GDLauncher-Setup.exe",
            &["https://github.com/gorilla-devs/GDLauncher/releases/download/v/GDLauncher-win-setup.exe"],
        )),
        Tool::new("l5-3", "Lunar Client", ActionKind::Download, "https://www.lunarclient.com/")
            .link(Link::new(
                "Lunar Client",
                "",
                "LunarClient-Setup.exe",
                &["https://launcherupdates.lunarclientcdn.com/Lunar%20Client%20v3.2.3.exe"],
            )),
        Tool::new("l6-3", "LabyMod", ActionKind::Download, "https://www.labymod.net/")
            .link(Link::new(
                "LabyMod",
                "",
                "LabyMod-Setup.exe",
                &["https://releases.r2.labymod.net/launcher/win32/x64/LabyModLauncherSetup-latest.exe"],
            )),
        Tool::new("l7-3", "Tecknix Client", ActionKind::Download, "https://tecknix.com/")
            .link(Link::new(
                "Tecknix Client",
                "",
                "Tecknix-Setup.exe",
                &["https://tecknix.com/client/TecknixClient.exe"],
            )),
        Tool::new("l8-3", "Salwyrr CLient", ActionKind::Download, "https://www.salwyrr.com/")
            .link(Link::new(
                "Salwyrr CLients",
                "",
                "Salwyrr-Setup.exe",
                &["https://download.overwolf.com/setup/electron/ehdhabenpndnlfhfchfacfmnkhmnmigdjjlkeimc"],
            )),
        Tool::new("l9-3", "Feather Launcher", ActionKind::Download, "https://feathermc.com/")
            .link(Link::new(
                "Feather Launcher",
                "",
                "FeatherLauncher-Setup.exe",
                &["https://launcher.feathercdn.net/dl/Feather%20Launcher%20Setup%201.5.9.exe"],
            )),
        Tool::new("l10-3", "Badlion Client", ActionKind::Download, "https://client.badlion.net/")
            .link(Link::new(
                "Badlion Client",
                "",
                "BadlionClient-Setup.exe",
                &["https://www.badlion.net/download/client/latest/windows"],
            )),
        // Game Stores (page 3)
        Tool::new("g1-3", "Steam", ActionKind::Download, "https://store.steampowered.com/")
            .link(Link::new(
                "Steam",
                "",
                "Steam-Setup.exe",
                &["https://cdn.cloudflare.steamstatic.com/client/installer/SteamSetup.exe"],
            )),
        Tool::new("g2-3", "Rare", ActionKind::Download, "https://github.com/RareDevs/Rare")
            .latest_from(VersionSource::github("RareDevs/Rare"))
            .link(Link::new(
                "Rare",
                "",
                "Rare-Setup.exe",
                &["https://github.com/RareDevs/Rare/releases/download/", "/Rare-", ".msi"],
            )),
        Tool::new("g3-3", "Origin", ActionKind::Download, "https://www.ea.com/ea-app")
            .link(Link::new(
                "Origin",
                "",
                "Origin-Setup.exe",
                &["https://origin-a.akamaihd.net/EA-Desktop-Client-Download/installer-releases/EAappInstaller.exe"],
            )),
        Tool::new("g4-3", "Epic Games", ActionKind::Download, "https://store.epicgames.com")
            .link(Link::new(
                "Epic Games",
                "",
                "Epic-Games-Setup.msi",
                &["https://launcher-public-service-prod06.ol.epicgames.com/launcher/api/installer/download/EpicGamesLauncherInstaller.msi"],
            )),
        Tool::new("g5-3", "GOG Galaxy", ActionKind::Download, "https://www.gog.com/galaxy")
            .link(Link::new(
                "GOG Galaxy",
                "",
                "GOG-Galaxy-Setup.exe",
                &["https://webinstallers.gog-statics.com/download/GOG_Galaxy_2.0.exe"],
            )),
        Tool::new(
            "g6-3",
            "Paradox",
            ActionKind::Download,
            "https://www.paradoxinteractive.com/our-games/launcher",
        )
        .link(Link::new(
            "Paradox",
            "",
            "Paradox-Setup.msi",
            &["https://launcher.paradoxinteractive.com/v2/paradox-launcher-installer-windows"],
        )),
        Tool::new(
            "g7-3",
            "Bloxstrap",
            ActionKind::Download,
            "https://github.com/pizzaboxer/bloxstrap",
        )
        .latest_from(VersionSource::github("pizzaboxer/bloxstrap"))
        .link(Link::new(
            "Bloxstrap",
            "",
            "Bloxstrap-Setup.exe",
            &[
                "https://github.com/pizzaboxer/bloxstrap/releases/download/v",
                "/Bloxstrap-v",
                ".exe",
            ],
        )),
        // Runtimes (page 3)
        Tool::new(
            "r1-3",
            "DirectX",
            ActionKind::Download,
            "https://www.microsoft.com/en-us/download/details.aspx?id=35",
        )
        .link(Link::new(
            "DirectX",
            "",
            "DirectX.exe",
            &["https://download.microsoft.com/download/1/7/1/1718CCC4-6315-4D8E-9543-8E28A4E18C4C/dxwebsetup.exe"],
        )),
        Tool::new(
            "r2-3",
            "VCRedists",
            ActionKind::Download,
            "https://github.com/abbodi1406/vcredist",
        )
        .link(Link::new(
            "VisualCppRedistAIO",
            "",
            "VCRedists.exe",
            &["https://github.com/abbodi1406/vcredist/releases/latest/download/VisualCppRedist_AIO_x86_x64.exe"],
        )),
        Tool::new(
            "r3-3",
            "XNA Framework",
            ActionKind::Download,
            "https://www.microsoft.com/en-us/download/details.aspx?id=20914",
        )
        .link(Link::new(
            "XNA Framework",
            "",
            "xnafx.msi",
            &["https://download.microsoft.com/download/A/C/2/AC2C903B-E6E8-42C2-9FD7-BEBAC362A930/xnafx40_redist.msi"],
        )),
        Tool::new(
            "r4-3",
            ".NET Framework",
            ActionKind::Download,
            "https://dotnet.microsoft.com/en-us/download/dotnet/8.0",
        )
        .link(Link::new(
            "ASP.NET Core 8.0 Runtime",
            "",
            "ASPDotNet-Installer.exe",
            &["https://download.visualstudio.microsoft.com/download/pr/4b805b84-302c-42e3-b57e-665d0bb7b1f0/3a0965017f98303c7fe1ab1291728e07/aspnetcore-runtime-8.0.1-win-x64.exe"],
        ))
        .link(Link::new(
            ".NET Desktop 8.0 Runtime",
            "",
            "DotNetDesktop-Installer.exe",
            &["https://download.visualstudio.microsoft.com/download/pr/f18288f6-1732-415b-b577-7fb46510479a/a98239f751a7aed31bc4aa12f348a9bf/windowsdesktop-runtime-8.0.1-win-x64.exe"],
        ))
        .link(Link::new(
            ".NET Runtime 8.0 Runtime",
            "",
            "DotNetRuntime-Installer.exe",
            &["https://download.visualstudio.microsoft.com/download/pr/cede7e69-dbd4-4908-9bfb-12fa4660e2b9/d9ed17179d0275abee5afd29d5460b48/dotnet-runtime-8.0.1-win-x64.exe"],
        )),
        Tool::new("r5-3", "Node.js", ActionKind::Download, "https://nodejs.org/")
            .link(Link::new(
                "Node.js 20.12.0 LTS",
                "",
                "Node-Installer.msi",
                &["https://nodejs.org/dist/v20.12.0/node-v20.12.0-x64.msi"],
            )),
        Tool::new("r6-3", "Python", ActionKind::Download, "https://python.org/")
            .link(Link::new(
                "Python 3.12",
                "",
                "Python312-Installer.msi",
                &["https://www.python.org/ftp/python/3.12.2/python-3.12.2-amd64.exe"],
            ))
            .link(Link::new(
                "Python 3.11",
                "",
                "Python311-Installer.msi",
                &["https://www.python.org/ftp/python/3.11.8/python-3.11.8-amd64.exe"],
            ))
            .link(Link::new(
                "Python 3.10",
                "",
                "Python310-Installer.msi",
                &["https://www.python.org/ftp/python/3.10.11/python-3.10.11-amd64.exe"],
            )),
        // Apps (page 3)
        Tool::new(
            "a1-3",
            "Achievement Watcher",
            ActionKind::Download,
            "https://github.com/xan105/Achievement-Watcher",
        )
        .link(Link::new(
            "Achievement Watcher",
            "",
            "Achievement-Watcher.exe",
            &["https://github.com/xan105/Achievement-Watcher/releases/latest/download/Achievement.Watcher.Setup.exe"],
        )),
        Tool::new("a2-3", "Spotify", ActionKind::Download, "https://open.spotify.com/")
            .link(Link::new(
                "Spotify",
                "",
                "Spotify.exe",
                &["https://download.scdn.co/SpotifySetup.exe"],
            )),
        Tool::new("a3-3", "Spicefy", ActionKind::RunShell, "https://spicetify.app/")
            .link(Link::new(
                "Spicefy",
                "",
                "",
                &["iwr -useb https://raw.githubusercontent.com/spicetify/spicetify-cli/master/install.ps1 | iex && iwr -useb https://raw.githubusercontent.com/spicetify/spicetify-marketplace/main/resources/install.ps1 | iex"],
            )),
        Tool::new("a4-3", "Discord", ActionKind::Download, "https://discord.com/")
            .link(Link::new(
                "Discord",
                "",
                "Discord-Setup.exe",
                &["https://discord.com/api/downloads/distributions/app/installers/latest?channel=stable&platform=win&arch=x86"],
            )),
        Tool::new("a5-3", "Vesktop", ActionKind::Download, "https://github.com/Vencord/Vesktop/")
            .latest_from(VersionSource::github("Vencord/Vesktop"))
            .link(Link::new(
                "Vesktop",
                "",
                "Vesktop-Setup.exe",
                &["https://github.com/Vencord/Vesktop/releases/download/v", "/Vesktop-Setup-", ".exe"],
            )),
        Tool::new("a6-3", "ArmCord", ActionKind::Download, "https://github.com/ArmCord/ArmCord/")
            .latest_from(VersionSource::github("ArmCord/ArmCord"))
            .link(Link::new(
                "ArmCord",
                "",
                "ArmCord-Setup.exe",
                &["https://github.com/ArmCord/ArmCord/releases/download/v", "/ArmCord.Setup.", ".exe"],
            )),
        Tool::new("a7-3", "Vencord", ActionKind::Download, "https://github.com/Vencord/Installer")
            .link(Link::new(
                "Vencord",
                "",
                "Vencord.exe",
                &["https://github.com/Vencord/Installer/releases/latest/download/VencordInstaller.exe"],
            )),
        Tool::new("a8-3", "BetterDiscord", ActionKind::Download, "https://github.com/BetterDiscord")
            .link(Link::new(
                "BetterDiscord",
                "",
                "BetterDiscord-Setup.exe",
                &["https://github.com/BetterDiscord/Installer/releases/latest/download/BetterDiscord-Windows.exe"],
            )),
        Tool::new("a9-3", "Replugged", ActionKind::Download, "https://github.com/replugged-org")
            .link(Link::new(
                "Replugged",
                "",
                "Replugged-Installer.exe",
                &["https://github.com/replugged-org/tauri-installer/releases/latest/download/replugged-installer-windows.exe"],
            )),
    ]
}
